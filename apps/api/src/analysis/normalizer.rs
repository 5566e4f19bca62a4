//! Text normalization — first stage of the analysis pipeline.
//!
//! Extracted text arrives noisy: PDF text runs reordered by position, OCR
//! output, printable runs salvaged from binary Word files. `normalize` repairs
//! it with a fixed rule order (later rules assume earlier cleanup) and is
//! idempotent: normalizing already-normalized text returns it unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// The single bullet glyph all list markers are unified to.
pub const BULLET: char = '•';

static CRLF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").expect("valid CRLF regex"));

static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B-\x1F\x7F]").expect("valid control-char regex"));

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid space regex"));

static TRAILING_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +\n").expect("valid trailing-space regex"));

// A hyphenation break is a hyphen followed by whitespace before the word
// continues ("exam- ple", "exam-\nple"). A bare in-word hyphen with no break
// ("well-known") is a compound word and stays.
static HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])-\s+([a-z])").expect("valid hyphenation regex"));

static SPACED_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9._%+-]+)\s*@\s*([A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,})")
        .expect("valid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?(\d{3})\)?[-.\s]*(\d{3})[-.\s]*(\d{4})").expect("valid phone regex")
});

static URL_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://)\s+").expect("valid url regex"));

/// Section-header synonym table: any matched variant is rewritten to the
/// canonical heading. Word-boundary anchored so unrelated words never match.
static HEADER_SYNONYMS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"(?i)\b(?:career|professional)\s+summary\b",
            "PROFESSIONAL SUMMARY",
        ),
        (
            r"(?i)\b(?:employment\s+history|work\s+experience|work\s+history)\b",
            "EXPERIENCE",
        ),
        (r"(?i)\bcore\s+competencies\b", "SKILLS"),
        (r"(?i)\bacademic\s+background\b", "EDUCATION"),
    ]
    .into_iter()
    .map(|(pattern, canonical)| {
        (
            Regex::new(pattern).expect("valid header synonym regex"),
            canonical,
        )
    })
    .collect()
});

static BULLET_GLYPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[•▪▫◦‣⁃][ \t]*").expect("valid bullet regex"));

static BULLET_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[-*][ \t]+").expect("valid dash-bullet regex"));

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank-line regex"));

/// Cleans raw extracted text. Pure; idempotent.
pub fn normalize(text: &str) -> String {
    // 1. Whitespace: CR variants to \n, tabs to spaces, collapse space runs,
    //    strip stray control characters and end-of-line spaces.
    let text = CRLF.replace_all(text, "\n");
    let text = text.replace('\t', " ");
    let text = CONTROL_CHARS.replace_all(&text, "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = TRAILING_SPACE.replace_all(&text, "\n");

    // 2. Hyphenation breaks, same-line and across newlines.
    let text = HYPHEN_BREAK.replace_all(&text, "$1$2");

    // 3. Contact fragments: spaced-out emails, phone groupings, split URLs.
    let text = SPACED_EMAIL.replace_all(&text, "$1@$2");
    let text = PHONE.replace_all(&text, "$1-$2-$3");
    let text = URL_SPACE.replace_all(&text, "$1");

    // 4. Section-header synonyms to the canonical vocabulary.
    let mut text = text.into_owned();
    for (pattern, canonical) in HEADER_SYNONYMS.iter() {
        text = pattern.replace_all(&text, *canonical).into_owned();
    }

    // 5. Bullet glyph unification.
    let text = BULLET_GLYPH.replace_all(&text, format!("${{1}}{BULLET} ").as_str());
    let text = BULLET_DASH.replace_all(&text, format!("${{1}}{BULLET} ").as_str());

    // 6. At most one blank line between paragraphs.
    let text = BLANK_RUNS.replace_all(&text, "\n\n");

    // 7. Trim the whole result.
    text.trim().to_string()
}
