use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much a job-description keyword matters to the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// A keyword to look for in a resume, as supplied by the AI analysis step
/// (or the local fallback extractor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateKeyword {
    pub keyword: String,
    pub importance: Importance,
}

/// Presence result for one candidate keyword. Order and importance are
/// carried through from the candidate list verbatim; only `found` is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
    pub importance: Importance,
}

/// One completed analysis run. Immutable once built; a re-run replaces it
/// wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub ats_score: u8,
    pub keyword_matches: Vec<KeywordMatch>,
    pub suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ResumeAnalysis {
    pub fn new(ats_score: u8, keyword_matches: Vec<KeywordMatch>, suggestions: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ats_score,
            keyword_matches,
            suggestions,
            created_at: Utc::now(),
        }
    }
}
