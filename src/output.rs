//! Output types: the structured records produced by an extraction.
//!
//! Both extraction paths — the model-assisted path and the deterministic
//! heuristic path — produce the same shapes. Record types therefore derive
//! `Deserialize` as well as `Serialize`: the model's JSON reply parses
//! straight into [`ExtractedSections`], and the orchestrator never needs a
//! conversion layer between the two paths.

use serde::{Deserialize, Serialize};

/// Document-level metadata captured alongside the extracted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// PDF title tag, empty when absent.
    #[serde(default)]
    pub title: String,
    /// PDF author tag, empty when absent.
    #[serde(default)]
    pub author: String,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Display name of the uploaded/opened file.
    #[serde(default)]
    pub file_name: String,
}

/// One work-experience entry.
///
/// All fields may be empty except `title`, which falls back to the entry's
/// full header line when no "title at company" split is found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// The three record lists shared by both extraction paths.
///
/// This is also the exact JSON object shape the model is instructed to
/// return. The three keys are deliberately *not* defaulted: a model reply
/// missing any of them fails deserialisation and routes the call to the
/// heuristic path instead of silently yielding empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSections {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// The complete result of one extraction call.
///
/// Owned by the caller once returned; the engine keeps no reference to it
/// and no state between calls. `raw_text` is always populated — callers
/// that do not want to persist the full text drop it themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeExtraction {
    pub metadata: DocumentMetadata,
    pub raw_text: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeExtraction {
    /// Assemble a result from the shared section shape.
    pub(crate) fn from_sections(
        metadata: DocumentMetadata,
        raw_text: String,
        sections: ExtractedSections,
    ) -> Self {
        Self {
            metadata,
            raw_text,
            skills: sections.skills,
            experience: sections.experience,
            projects: sections.projects,
        }
    }
}
