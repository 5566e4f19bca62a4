//! Axum route handlers for the Analysis API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::{AiAnalysis, FALLBACK_SUGGESTION};
use crate::analysis::{extract_keywords, match_keywords, normalize, score};
use crate::errors::AppError;
use crate::models::analysis::{CandidateKeyword, Importance, ResumeAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Full analysis: normalize the resume, get candidate keywords and
/// suggestions from the provider chain (local keyword extraction over the
/// job description when no provider answers), then match and score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume = normalize(&request.resume_text);

    let ai = match state.providers.analyze(&resume, &request.job_description).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("provider chain unavailable ({e}); using local keyword extraction");
            local_fallback(&request.job_description)
        }
    };

    let matches = match_keywords(&ai.keywords, &resume);
    let ats_score = score(&matches, &resume, &request.job_description);

    Ok(Json(AnalyzeResponse {
        analysis: ResumeAnalysis::new(ats_score, matches, ai.suggestions),
    }))
}

/// POST /api/v1/optimize
///
/// Returns a rewritten resume targeted at the job description. Unlike
/// analysis there is no local fallback; all providers failing is an error.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume = normalize(&request.resume_text);
    let optimized_text = state
        .providers
        .optimize(&resume, &request.job_description)
        .await
        .map_err(|e| AppError::Provider(e.to_string()))?;

    Ok(Json(OptimizeResponse { optimized_text }))
}

/// Candidate keywords derived locally from the job description, used when
/// no provider is configured or every provider failed.
fn local_fallback(job_description: &str) -> AiAnalysis {
    AiAnalysis {
        keywords: extract_keywords(job_description)
            .into_iter()
            .map(|keyword| CandidateKeyword {
                keyword,
                importance: Importance::Medium,
            })
            .collect(),
        suggestions: vec![FALLBACK_SUGGESTION.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_fallback_derives_medium_importance_keywords() {
        let fallback = local_fallback("We need python and kubernetes experience");
        assert!(!fallback.keywords.is_empty());
        assert!(fallback
            .keywords
            .iter()
            .all(|k| k.importance == Importance::Medium));
        assert!(fallback.keywords.iter().any(|k| k.keyword == "python"));
        assert_eq!(fallback.suggestions, vec![FALLBACK_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_local_fallback_empty_jd_scores_neutral_downstream() {
        let fallback = local_fallback("");
        assert!(fallback.keywords.is_empty());
        let matches = match_keywords(&fallback.keywords, "any resume");
        assert_eq!(score(&matches, "any resume", ""), 50);
    }
}
