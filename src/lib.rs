//! # resume-extract
//!
//! Extract structured skills, work-experience, and project records from
//! resume PDFs.
//!
//! ## Why this crate?
//!
//! Resumes are unstructured documents with no fixed layout: every candidate
//! arranges sections differently, and multi-column templates scramble naive
//! text extraction entirely. This crate linearizes the page geometry into
//! reading order, locates semantic sections by heading pattern, and
//! decomposes each section into typed records with deterministic
//! heuristics. When a model-service credential is configured, a
//! language-model call is tried first and the heuristics serve as an
//! always-available fallback — the caller sees one uniform result shape
//! either way.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate path/bytes and %PDF magic
//!  ├─ 2. Text      pdfium text blocks → row-band ordered stream + metadata
//!  ├─ 3a. Model    one bounded Gemini call, JSON reply   (best effort)
//!  ├─ 3b. Fallback heading spans → skills/experience/projects heuristics
//!  └─ 4. Output    ResumeExtraction { metadata, raw_text, records… }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_extract::{extract, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Model path auto-enabled when GEMINI_API_KEY is set;
//!     // otherwise the deterministic heuristics run alone.
//!     let config = ExtractionConfig::default();
//!     let result = extract("resume.pdf", &config).await?;
//!     println!("skills: {:?}", result.skills);
//!     for job in &result.experience {
//!         println!("{} at {} ({})", job.title, job.company, job.duration);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume2json` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume-extract = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod prompts;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, API_KEY_ENV_VAR};
pub use error::{ExtractError, ModelError};
pub use extract::{extract, extract_from_bytes, extract_sync, heuristic_sections, inspect};
pub use output::{
    DocumentMetadata, ExperienceEntry, ExtractedSections, ProjectEntry, ResumeExtraction,
};
pub use pipeline::sections::SectionId;
