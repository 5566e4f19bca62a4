//! Resume structure rendering — maps a segmented resume onto a stylistic
//! layout the editor can display. Style-only: lines pass through untouched,
//! no layout math happens here.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::{normalize, segment, SectionMap};
use crate::analysis::segmenter::HEADER_KEY;
use crate::errors::AppError;

/// How a section should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStyle {
    /// Name/contact block at the top, no title.
    ContactBlock,
    /// Titled free-running text.
    Paragraph,
    /// Titled bulleted list.
    BulletList,
    /// Titled comma-joinable list (skills, languages).
    InlineList,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub key: String,
    pub title: String,
    pub style: SectionStyle,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedResume {
    pub sections: Vec<RenderedSection>,
}

/// Maps each segmented section to a display style and title, in order.
pub fn render(map: &SectionMap) -> RenderedResume {
    RenderedResume {
        sections: map
            .iter()
            .map(|(key, lines)| RenderedSection {
                key: key.to_string(),
                title: display_title(key),
                style: style_for(key, lines),
                lines: lines.to_vec(),
            })
            .collect(),
    }
}

fn style_for(key: &str, lines: &[String]) -> SectionStyle {
    if key == HEADER_KEY {
        return SectionStyle::ContactBlock;
    }
    if key.contains("skill") || key.contains("competenc") || key.contains("language") {
        return SectionStyle::InlineList;
    }
    if lines.iter().any(|l| l.starts_with("• ")) {
        return SectionStyle::BulletList;
    }
    SectionStyle::Paragraph
}

/// Display titles for the canonical key set; unknown keys fall back to a
/// capitalized form of the key itself.
fn display_title(key: &str) -> String {
    match key {
        HEADER_KEY => String::new(),
        "summary" | "professionalsummary" | "careersummary" => "Professional Summary".to_string(),
        "objective" => "Objective".to_string(),
        "experience" | "workexperience" | "employmenthistory" | "workhistory" => {
            "Experience".to_string()
        }
        "education" | "academicbackground" => "Education".to_string(),
        "skills" | "technicalskills" | "corecompetencies" => "Skills".to_string(),
        "projects" => "Projects".to_string(),
        "certifications" => "Certifications".to_string(),
        "achievements" | "awards" | "honors" => "Achievements".to_string(),
        "languages" => "Languages".to_string(),
        "volunteer" | "volunteering" => "Volunteer".to_string(),
        "publications" => "Publications".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: String,
}

/// POST /api/v1/render
///
/// Normalizes and segments the given resume text, then returns the styled
/// section layout.
pub async fn handle_render(
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderedResume>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let sections = segment(&normalize(&request.text));
    Ok(Json(render(&sections)))
}
