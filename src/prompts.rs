//! Prompts for the model-assisted extraction path.
//!
//! Centralising the prompt text here serves two purposes:
//!
//! 1. **Single source of truth** — the output contract the model is held to
//!    lives in exactly one place, next to the schema wording.
//! 2. **Testability** — unit tests can inspect the prompt without making a
//!    live model call, so contract regressions are caught cheaply.

/// System instruction fixed for every model-path request.
pub const SYSTEM_PROMPT: &str = "You are an expert resume parser. You read the plain text of a resume and return only structured data about the candidate's skills, work experience, and projects. You never invent information that is not present in the text.";

/// Build the user instruction carrying the resume text and the demanded
/// JSON shape.
///
/// The schema wording mirrors the crate's own record types exactly:
/// the reply is deserialised straight into them with no mapping layer.
pub fn extraction_request(resume_text: &str) -> String {
    format!(
        r#"Extract the skills, work experience, and projects from the resume text below.

Respond with a single JSON object with exactly these three keys and no others:

{{
  "skills": ["skill", ...],
  "experience": [{{"title": "", "company": "", "duration": "", "description": ""}}, ...],
  "projects": [{{"name": "", "technologies": ["", ...], "description": ""}}, ...]
}}

Rules:
- Every key must be present; use an empty array when a section is absent.
- Do not wrap the JSON in markdown fences or add commentary.
- Copy dates and names verbatim from the text.

Resume text:
"""
{resume_text}
""""#
    )
}
