//! Prompt templates for the provider chain. Placeholders are filled with
//! `.replace` before dispatch; every prompt instructs the model to answer
//! with bare JSON so the fence-stripping parse stays simple.

pub const ANALYZE_SYSTEM: &str = "You are an ATS (Applicant Tracking System) analyst. You respond with valid JSON only, no prose, no markdown fences.";

pub const ANALYZE_PROMPT: &str = r#"Compare the resume below against the job description and produce:
1. "keywords": the 10-20 most important keywords from the job description, each as {"keyword": string, "importance": "high" | "medium" | "low"}.
2. "suggestions": 3-6 short, actionable suggestions to improve the resume for this job.

Respond with exactly this JSON shape:
{"keywords": [{"keyword": "...", "importance": "high"}], "suggestions": ["..."]}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}
"#;

pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer. You respond with the rewritten resume text only, no commentary.";

pub const OPTIMIZE_PROMPT: &str = r#"Rewrite the resume below so it is better targeted at the job description while staying truthful to the original content. Keep the section structure, tighten wording, and work in missing high-importance keywords where the candidate's experience supports them.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}
"#;
