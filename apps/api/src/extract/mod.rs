//! Document extraction — turns uploaded bytes into a single text string for
//! the analysis pipeline.
//!
//! Extraction is the only place that judges whether a document was readable:
//! under [`MIN_TEXT_LEN`] recovered characters counts as failure with a
//! descriptive message. The pipeline downstream never re-checks.

pub mod handlers;

use crate::errors::AppError;

/// Minimum trimmed character count for extraction to count as a success.
pub const MIN_TEXT_LEN: usize = 20;

/// Printable runs shorter than this are treated as binary noise when
/// salvaging text from legacy Word files.
const MIN_SALVAGE_RUN: usize = 4;

/// Declared media kind of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    LegacyWord,
    Image,
}

impl DocumentKind {
    /// Infers the kind from the multipart content type, falling back to the
    /// filename extension. Returns `None` for media we do not understand.
    pub fn detect(content_type: Option<&str>, filename: Option<&str>) -> Option<Self> {
        if let Some(ct) = content_type {
            let ct = ct.to_lowercase();
            if ct == "application/pdf" {
                return Some(Self::Pdf);
            }
            if ct.starts_with("text/") {
                return Some(Self::PlainText);
            }
            if ct.starts_with("image/") {
                return Some(Self::Image);
            }
            if ct == "application/msword"
                || ct == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            {
                return Some(Self::LegacyWord);
            }
        }
        let extension = filename?.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "md" | "text" => Some(Self::PlainText),
            "doc" | "docx" => Some(Self::LegacyWord),
            "png" | "jpg" | "jpeg" | "webp" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Extracts text from document bytes. Fails with a user-visible, retryable
/// message when the document yields fewer than [`MIN_TEXT_LEN`] characters.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("failed to read PDF: {e}")))?,
        DocumentKind::LegacyWord => salvage_printable_runs(bytes),
        DocumentKind::Image => {
            return Err(AppError::Extraction(
                "image uploads must be OCR'd in the client before upload; send the extracted text instead".to_string(),
            ))
        }
    };

    if text.trim().chars().count() < MIN_TEXT_LEN {
        return Err(AppError::Extraction(
            "could not extract readable text from the document (under 20 characters recovered)"
                .to_string(),
        ));
    }
    Ok(text)
}

/// Salvages readable text from a binary Word stream: keeps runs of printable
/// characters long enough to be words, drops everything else.
fn salvage_printable_runs(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut run = String::new();

    let mut flush = |run: &mut String, out: &mut String| {
        if run.trim().len() >= MIN_SALVAGE_RUN {
            out.push_str(run.trim());
            out.push('\n');
        }
        run.clear();
    };

    for &b in bytes {
        match b {
            b'\n' | b'\r' => run.push('\n'),
            b' '..=b'~' => run.push(b as char),
            _ => flush(&mut run, &mut out),
        }
    }
    flush(&mut run, &mut out);
    out
}
