//! AI suggestion layer — a sequential fallback chain over interchangeable
//! providers (Gemini → Groq → OpenAI).
//!
//! ARCHITECTURAL RULE: no other module talks to a provider API directly.
//! The chain iterates providers in priority order, short-circuits on the
//! first success, and surfaces the first error if every provider fails.
//! A provider that answers but returns unparseable JSON still "succeeds":
//! its analysis degrades to an empty keyword list and a single fallback
//! suggestion, so scoring downstream always receives a well-formed list.

pub mod prompts;
pub mod providers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::analysis::CandidateKeyword;
use providers::{GeminiProvider, GroqProvider, OpenAiProvider};

/// Shown instead of suggestions when a provider answered with unusable JSON.
pub const FALLBACK_SUGGESTION: &str =
    "Automatic suggestions are unavailable right now. Re-run the analysis to try again.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned empty content")]
    EmptyContent,

    #[error("no AI provider is configured")]
    NoneConfigured,
}

/// Keyword/suggestion payload produced by the analyze capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub keywords: Vec<CandidateKeyword>,
    pub suggestions: Vec<String>,
}

/// One interchangeable AI backend. Implementations supply the raw
/// `complete` call; the analyze/optimize capabilities are shared.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;

    /// Derives job-description keywords and resume suggestions.
    async fn analyze(&self, resume: &str, job_description: &str) -> Result<AiAnalysis, ProviderError> {
        let prompt = prompts::ANALYZE_PROMPT
            .replace("{job_description}", job_description)
            .replace("{resume}", resume);
        let text = self.complete(prompts::ANALYZE_SYSTEM, &prompt).await?;
        Ok(parse_analysis(self.name(), &text))
    }

    /// Rewrites the resume targeted at the job description.
    async fn optimize(&self, resume: &str, job_description: &str) -> Result<String, ProviderError> {
        let prompt = prompts::OPTIMIZE_PROMPT
            .replace("{job_description}", job_description)
            .replace("{resume}", resume);
        self.complete(prompts::OPTIMIZE_SYSTEM, &prompt).await
    }
}

/// Providers in fixed priority order, built from whichever API keys are set.
pub struct ProviderChain {
    providers: Vec<Box<dyn Provider>>,
}

impl ProviderChain {
    pub fn from_config(config: &Config) -> Self {
        let mut providers: Vec<Box<dyn Provider>> = Vec::new();
        if let Some(key) = &config.gemini_api_key {
            providers.push(Box::new(GeminiProvider::new(key.clone())));
        }
        if let Some(key) = &config.groq_api_key {
            providers.push(Box::new(GroqProvider::new(key.clone())));
        }
        if let Some(key) = &config.openai_api_key {
            providers.push(Box::new(OpenAiProvider::new(key.clone())));
        }
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn analyze(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<AiAnalysis, ProviderError> {
        let mut first_error: Option<ProviderError> = None;
        for provider in &self.providers {
            match provider.analyze(resume, job_description).await {
                Ok(analysis) => {
                    debug!(
                        "provider {} analyzed: {} keywords, {} suggestions",
                        provider.name(),
                        analysis.keywords.len(),
                        analysis.suggestions.len()
                    );
                    return Ok(analysis);
                }
                Err(e) => {
                    warn!("provider {} analyze failed: {e}", provider.name());
                    first_error.get_or_insert(e);
                }
            }
        }
        Err(first_error.unwrap_or(ProviderError::NoneConfigured))
    }

    pub async fn optimize(
        &self,
        resume: &str,
        job_description: &str,
    ) -> Result<String, ProviderError> {
        let mut first_error: Option<ProviderError> = None;
        for provider in &self.providers {
            match provider.optimize(resume, job_description).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!("provider {} optimize failed: {e}", provider.name());
                    first_error.get_or_insert(e);
                }
            }
        }
        Err(first_error.unwrap_or(ProviderError::NoneConfigured))
    }
}

/// Parses an analyze response leniently: fences stripped, and a parse
/// failure degrades to the fallback payload instead of an error.
fn parse_analysis(provider: &str, text: &str) -> AiAnalysis {
    match serde_json::from_str(strip_json_fences(text)) {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("provider {provider} returned unparseable analysis JSON: {e}");
            AiAnalysis {
                keywords: Vec::new(),
                suggestions: vec![FALLBACK_SUGGESTION.to_string()],
            }
        }
    }
}

/// Strips ```json … ``` or ``` … ``` fences that models wrap JSON in.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let body = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Importance;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        assert_eq!(
            strip_json_fences("```json\n{\"a\": 1}\n```"),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_strip_json_fences_plain_fence() {
        assert_eq!(strip_json_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fences_no_fence() {
        assert_eq!(strip_json_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_analysis_valid_json() {
        let text = r#"{"keywords": [{"keyword": "Rust", "importance": "high"}], "suggestions": ["Add metrics"]}"#;
        let analysis = parse_analysis("test", text);
        assert_eq!(analysis.keywords.len(), 1);
        assert_eq!(analysis.keywords[0].importance, Importance::High);
        assert_eq!(analysis.suggestions, vec!["Add metrics".to_string()]);
    }

    #[test]
    fn test_parse_analysis_fenced_json() {
        let text = "```json\n{\"keywords\": [], \"suggestions\": []}\n```";
        let analysis = parse_analysis("test", text);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_parse_analysis_garbage_degrades_to_fallback() {
        let analysis = parse_analysis("test", "Sure! Here are some thoughts...");
        assert!(analysis.keywords.is_empty());
        assert_eq!(analysis.suggestions, vec![FALLBACK_SUGGESTION.to_string()]);
    }

    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::EmptyContent)
        }
    }

    struct CannedProvider(&'static str);

    #[async_trait]
    impl Provider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_chain_falls_through_to_next_provider() {
        let chain = ProviderChain {
            providers: vec![
                Box::new(FailingProvider),
                Box::new(CannedProvider(r#"{"keywords": [], "suggestions": ["ok"]}"#)),
            ],
        };
        let analysis = chain.analyze("resume", "jd").await.unwrap();
        assert_eq!(analysis.suggestions, vec!["ok".to_string()]);
    }

    #[tokio::test]
    async fn test_chain_reports_first_error_when_all_fail() {
        let chain = ProviderChain {
            providers: vec![Box::new(FailingProvider), Box::new(FailingProvider)],
        };
        let err = chain.analyze("resume", "jd").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyContent));
    }

    #[tokio::test]
    async fn test_empty_chain_reports_none_configured() {
        let chain = ProviderChain { providers: vec![] };
        let err = chain.optimize("resume", "jd").await.unwrap_err();
        assert!(matches!(err, ProviderError::NoneConfigured));
    }

    #[tokio::test]
    async fn test_optimize_returns_raw_text() {
        let chain = ProviderChain {
            providers: vec![Box::new(CannedProvider("Rewritten resume."))],
        };
        let text = chain.optimize("resume", "jd").await.unwrap();
        assert_eq!(text, "Rewritten resume.");
    }
}
