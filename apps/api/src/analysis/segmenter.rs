#![allow(dead_code)]

//! Section segmentation — splits normalized resume text into an ordered
//! section-key → lines mapping.
//!
//! Lines preceding the first recognized header land in the implicit `header`
//! section. Keys are a deterministic function of the matched header line
//! (lower-cased, non-letters stripped), so two differently-worded headers can
//! collapse to the same key; that lossy behavior is intentional.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// The implicit section holding lines before the first recognized header.
pub const HEADER_KEY: &str = "header";

/// Header-recognition patterns in priority order; the first match wins.
/// All are case-insensitive and anchored at line start.
static HEADER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(?:(?:professional\s+|career\s+)?summary|objective|profile)\b",
        r"(?i)^(?:(?:work\s+|professional\s+)?experience|employment\s+history|work\s+history)\b",
        r"(?i)^(?:education|academic\s+background|academics)\b",
        r"(?i)^(?:(?:technical\s+)?skills|core\s+competencies|areas\s+of\s+expertise)\b",
        r"(?i)^(?:(?:personal\s+|key\s+|selected\s+)?projects)\b",
        r"(?i)^(?:certifications?|licenses?|credentials)\b",
        r"(?i)^(?:achievements|accomplishments|awards|honors)\b",
        r"(?i)^languages?\b",
        r"(?i)^(?:volunteer(?:ing)?|community\s+(?:service|involvement))\b",
        r"(?i)^publications?\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid header pattern"))
    .collect()
});

/// One segmented section: a derived key and its content lines in input order.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub key: String,
    pub lines: Vec<String>,
}

/// Insertion-ordered mapping from section key to content lines.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.lines.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|s| (s.key.as_str(), s.lines.as_slice()))
    }

    /// Total content lines across all sections.
    pub fn total_lines(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    // A repeated key extends the existing section, keeping first-seen order.
    fn push_lines(&mut self, key: &str, mut lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        match self.sections.iter_mut().find(|s| s.key == key) {
            Some(section) => section.lines.append(&mut lines),
            None => self.sections.push(Section {
                key: key.to_string(),
                lines,
            }),
        }
    }
}

/// Splits normalized text into sections. Every non-blank line is either
/// consumed as a section header or appears in exactly one section, in order.
pub fn segment(text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current_key = HEADER_KEY.to_string();
    let mut accumulator: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_header(line) {
            map.push_lines(&current_key, std::mem::take(&mut accumulator));
            current_key = derive_key(line);
        } else {
            accumulator.push(line.to_string());
        }
    }
    map.push_lines(&current_key, accumulator);
    map
}

fn is_header(line: &str) -> bool {
    HEADER_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Key derivation: lower-case the header line and strip non-letters.
fn derive_key(line: &str) -> String {
    line.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}
