//! Model-assisted extraction: one bounded call to the Gemini
//! `generateContent` endpoint, parsed into the shared record shapes.
//!
//! This path is strictly best-effort. Every failure mode — missing
//! credential, network error, quota, timeout, unparseable reply — surfaces
//! as a [`ModelError`], and the orchestrator answers every one of them the
//! same way: run the heuristic path. Because that fallback is always
//! available, a failed call is never retried here; a second network round
//! trip would only delay an answer the heuristics can produce immediately.

use crate::config::ExtractionConfig;
use crate::error::ModelError;
use crate::output::ExtractedSections;
use crate::prompts::{extraction_request, SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────

/// A configured handle to the model service.
///
/// Construction fails with [`ModelError::NotConfigured`] when no credential
/// can be resolved — the orchestrator treats that as a routing signal, not
/// a fault.
pub struct ModelClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_chars: usize,
    temperature: f32,
    max_tokens: usize,
    timeout_secs: u64,
}

impl ModelClient {
    /// Build a client from the extraction config, resolving the credential
    /// from the config or the `GEMINI_API_KEY` environment variable.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ModelError> {
        let api_key = config.resolve_api_key().ok_or(ModelError::NotConfigured)?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| ModelError::CallFailed(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            max_chars: config.max_model_chars,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_secs: config.api_timeout_secs,
        })
    }

    /// Send the resume text to the model and parse its reply.
    ///
    /// The text is truncated to the configured character budget before the
    /// request is built. Exactly one attempt is made.
    pub async fn extract(&self, resume_text: &str) -> Result<ExtractedSections, ModelError> {
        let start = Instant::now();
        let truncated = truncate_chars(resume_text, self.max_chars);
        let user_prompt = extraction_request(truncated);

        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: &user_prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
                response_mime_type: "application/json",
            },
        };

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    ModelError::CallFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::CallFailed(format!("HTTP {status}: {body}")));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidReply(format!("malformed response envelope: {e}")))?;

        let text = reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or_else(|| ModelError::InvalidReply("reply carried no text".into()))?;

        let sections = parse_reply(&text)?;
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            skills = sections.skills.len(),
            experience = sections.experience.len(),
            projects = sections.projects.len(),
            "model extraction succeeded"
        );
        Ok(sections)
    }
}

// ── Reply handling ───────────────────────────────────────────────────────

/// Parse a raw model reply into the shared section shape.
///
/// An optional markdown fence is stripped first; the remainder must be a
/// JSON object carrying all three keys.
pub(crate) fn parse_reply(raw: &str) -> Result<ExtractedSections, ModelError> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned).map_err(|e| ModelError::InvalidReply(e.to_string()))
}

/// Strip a leading/trailing ``` fence, with an optional language tag after
/// the opening backticks.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or_else(|| rest.trim())
}

/// Truncate at a character boundary, never mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ExperienceEntry;

    #[test]
    fn strips_fence_with_language_tag() {
        let raw = "```json\n{\"skills\": []}\n```";
        assert_eq!(strip_code_fence(raw), "{\"skills\": []}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn parses_well_formed_reply() {
        let raw = r#"```json
{"skills": ["Rust"], "experience": [{"title": "Engineer"}], "projects": []}
```"#;
        let sections = parse_reply(raw).expect("valid reply");
        assert_eq!(sections.skills, vec!["Rust"]);
        assert_eq!(
            sections.experience,
            vec![ExperienceEntry {
                title: "Engineer".into(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn rejects_prose_reply() {
        let err = parse_reply("I could not find any structured data, sorry!").unwrap_err();
        assert!(matches!(err, ModelError::InvalidReply(_)));
    }

    #[test]
    fn rejects_reply_missing_a_key() {
        let err = parse_reply(r#"{"skills": [], "projects": []}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidReply(_)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "héllo wörld";
        let cut = truncate_chars(text, 4);
        assert_eq!(cut, "héll");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn client_requires_a_credential() {
        let config = ExtractionConfig::builder().skip_model(true).build().unwrap();
        assert!(matches!(
            ModelClient::from_config(&config),
            Err(ModelError::NotConfigured)
        ));
    }
}
