//! Keyword extraction and matching.
//!
//! `extract_keywords` derives a candidate set from free text: a static
//! vocabulary lookup plus a capitalized-token heuristic. It exists as the
//! offline fallback for the AI keyword step, which normally supplies the
//! candidate list. `match_keywords` is a plain case-insensitive substring
//! presence test — no stemming, no fuzzy matching. That means any keyword
//! that happens to be a substring of an unrelated word counts as present;
//! the candidate list comes from an external provider, so this stays as-is.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::analysis::{CandidateKeyword, KeywordMatch};

/// Static vocabulary: technical terms, soft skills, business terms.
/// Single plain words are matched as whole tokens; entries containing spaces
/// or symbols (`machine learning`, `c++`, `node.js`) as substrings.
const TECHNICAL_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "golang",
    "c++",
    "c#",
    "sql",
    "nosql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "kubernetes",
    "docker",
    "terraform",
    "aws",
    "azure",
    "gcp",
    "linux",
    "git",
    "ci/cd",
    "jenkins",
    "rest api",
    "graphql",
    "microservices",
    "machine learning",
    "deep learning",
    "data analysis",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    "excel",
    "tableau",
    "power bi",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "kafka",
    "spark",
    "hadoop",
    "devops",
    "cloud computing",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "attention to detail",
    "conflict resolution",
    "decision making",
    "mentoring",
    "public speaking",
    "negotiation",
];

const BUSINESS_TERMS: &[&str] = &[
    "project management",
    "product management",
    "stakeholder management",
    "strategic planning",
    "business development",
    "process improvement",
    "risk management",
    "vendor management",
    "customer service",
    "budgeting",
    "forecasting",
    "marketing",
    "sales",
    "operations",
    "compliance",
    "agile",
    "scrum",
    "kpi",
    "roi",
];

/// Capitalized tokens of length 3–19, extracted from the original-case text.
static CAPITALIZED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z]{2,18}\b").expect("valid token regex"));

const MAX_CAPITALIZED_TOKENS: usize = 10;

fn vocabulary() -> impl Iterator<Item = &'static str> {
    TECHNICAL_TERMS
        .iter()
        .chain(SOFT_SKILLS)
        .chain(BUSINESS_TERMS)
        .copied()
}

/// Derives a deduplicated candidate keyword set from free text: vocabulary
/// hits first (in table order), then up to ten capitalized tokens in order
/// of appearance, lower-cased.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for entry in vocabulary() {
        let plain_word = entry.chars().all(|c| c.is_ascii_alphanumeric());
        let hit = if plain_word {
            tokens.contains(entry)
        } else {
            lower.contains(entry)
        };
        if hit && seen.insert(entry.to_string()) {
            keywords.push(entry.to_string());
        }
    }

    let mut distinct_tokens: Vec<&str> = Vec::new();
    for m in CAPITALIZED_TOKEN.find_iter(text) {
        let token = m.as_str();
        if !distinct_tokens.contains(&token) {
            distinct_tokens.push(token);
            if distinct_tokens.len() == MAX_CAPITALIZED_TOKENS {
                break;
            }
        }
    }
    for token in distinct_tokens {
        let token = token.to_lowercase();
        if seen.insert(token.clone()) {
            keywords.push(token);
        }
    }

    keywords
}

/// Tests each candidate keyword for case-insensitive substring presence in
/// the resume text. Input order and importance labels are preserved verbatim.
pub fn match_keywords(candidates: &[CandidateKeyword], resume_text: &str) -> Vec<KeywordMatch> {
    let resume_lower = resume_text.to_lowercase();
    candidates
        .iter()
        .map(|c| KeywordMatch {
            keyword: c.keyword.clone(),
            found: resume_lower.contains(&c.keyword.to_lowercase()),
            importance: c.importance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Importance;

    #[test]
    fn test_vocabulary_single_words_match_whole_tokens_only() {
        // "java" must not fire on "javascript"
        let keywords = extract_keywords("wrote javascript all day");
        assert!(keywords.contains(&"javascript".to_string()));
        assert!(!keywords.contains(&"java".to_string()));
    }

    #[test]
    fn test_vocabulary_multiword_entries_match_as_substrings() {
        let keywords = extract_keywords("applied machine learning to churn models");
        assert!(keywords.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_vocabulary_symbol_entries_match() {
        let keywords = extract_keywords("shipped c++ services with ci/cd and node.js");
        assert!(keywords.contains(&"c++".to_string()));
        assert!(keywords.contains(&"ci/cd".to_string()));
        assert!(keywords.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_capitalized_tokens_are_lowercased_and_capped() {
        let text = "Alpha Bravo Charlie Delta Echo Foxtrot Golf Hotel India Juliett Kilo Lima";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "alpha");
        assert!(!keywords.contains(&"kilo".to_string()));
    }

    #[test]
    fn test_capitalized_token_length_bounds() {
        // "Go" too short (2), 20-char token too long
        let keywords = extract_keywords("Go Abcdefghijklmnopqrst");
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_vocabulary_hits_precede_capitalized_tokens() {
        let keywords = extract_keywords("Maria used python daily");
        let py = keywords.iter().position(|k| k == "python").unwrap();
        let maria = keywords.iter().position(|k| k == "maria").unwrap();
        assert!(py < maria);
    }

    #[test]
    fn test_result_is_deduplicated() {
        let keywords = extract_keywords("Python python PYTHON Python");
        assert_eq!(
            keywords.iter().filter(|k| k.as_str() == "python").count(),
            1
        );
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
    }

    fn candidates(pairs: &[(&str, Importance)]) -> Vec<CandidateKeyword> {
        pairs
            .iter()
            .map(|(k, i)| CandidateKeyword {
                keyword: k.to_string(),
                importance: *i,
            })
            .collect()
    }

    #[test]
    fn test_match_preserves_order_and_importance() {
        let matches = match_keywords(
            &candidates(&[
                ("Python", Importance::High),
                ("Excel", Importance::Low),
            ]),
            "Experienced Python developer",
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].keyword, "Python");
        assert!(matches[0].found);
        assert_eq!(matches[0].importance, Importance::High);
        assert_eq!(matches[1].keyword, "Excel");
        assert!(!matches[1].found);
        assert_eq!(matches[1].importance, Importance::Low);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let matches = match_keywords(
            &candidates(&[("KUBERNETES", Importance::Medium)]),
            "deployed on kubernetes",
        );
        assert!(matches[0].found);
    }

    #[test]
    fn test_match_substring_containment_is_deliberate() {
        // "manage" is a substring of "managed" — counts as present
        let matches = match_keywords(
            &candidates(&[("manage", Importance::Low)]),
            "managed a team of five",
        );
        assert!(matches[0].found);
    }

    #[test]
    fn test_match_empty_candidate_list() {
        assert!(match_keywords(&[], "").is_empty());
    }

    #[test]
    fn test_match_empty_keyword_is_a_substring_of_everything() {
        // pure substring containment, degenerate case included
        let matches = match_keywords(&candidates(&[("", Importance::Low)]), "anything");
        assert!(matches[0].found);
    }
}
