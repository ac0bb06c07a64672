//! Configuration for resume extraction.
//!
//! All behaviour is controlled through [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across threads and to log exactly which settings
//! produced a given result.
//!
//! The single most important field is the model-service credential: its
//! presence or absence decides which extraction path runs first. Absence is
//! not an error — it routes every call straight to the heuristic path.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable consulted when no explicit API key is configured.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Configuration for a resume extraction.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use resume_extract::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .model("gemini-2.5-flash")
///     .api_timeout_secs(20)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Model-service API key. When `None`, `GEMINI_API_KEY` is consulted at
    /// call time; when that is also unset, the heuristic path runs alone.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,

    /// Model identifier sent to the service. Default: "gemini-2.5-flash".
    pub model: String,

    /// Force the heuristic path even when a credential is present.
    /// Default: false.
    pub skip_model: bool,

    /// Maximum characters of resume text sent to the model. Default: 8000.
    ///
    /// Resumes longer than this are truncated at a character boundary before
    /// the request is built, keeping the request body inside service size
    /// limits. The heuristic path always sees the full text.
    pub max_model_chars: usize,

    /// Sampling temperature for the model completion. Default: 0.1.
    ///
    /// Extraction wants fidelity to the page, not creativity.
    pub temperature: f32,

    /// Maximum tokens the model may generate. Default: 2048.
    pub max_tokens: usize,

    /// Per-call timeout for the model service in seconds. Default: 30.
    ///
    /// A timed-out call is treated like any other model failure: the
    /// orchestrator falls back immediately, with no retry.
    pub api_timeout_secs: u64,

    /// PDF user password for encrypted documents.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            skip_model: false,
            max_model_chars: 8000,
            temperature: 0.1,
            max_tokens: 2048,
            api_timeout_secs: 30,
            password: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("skip_model", &self.skip_model)
            .field("max_model_chars", &self.max_model_chars)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Resolve the effective API key: explicit config first, then the
    /// `GEMINI_API_KEY` environment variable. Empty strings count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        if self.skip_model {
            return None;
        }
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty()))
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn skip_model(mut self, v: bool) -> Self {
        self.config.skip_model = v;
        self
    }

    pub fn max_model_chars(mut self, n: usize) -> Self {
        self.config.max_model_chars = n;
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        if c.model.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "model identifier must not be empty".into(),
            ));
        }
        if c.max_model_chars == 0 {
            return Err(ExtractError::InvalidConfig(
                "max_model_chars must be ≥ 1".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(ExtractError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
