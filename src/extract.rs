//! Extraction entry points and path selection.
//!
//! The orchestrator is a selection function over two ordered strategies:
//! the model-assisted path (best-effort, may fail) and the heuristic path
//! (deterministic, never fails on a readable document). Exactly one
//! strategy's output is adopted per call; the two are never merged, so a
//! result is always internally consistent with a single extractor.
//!
//! The only error a caller ever observes is document-level unreadability.
//! Every model-path fault is absorbed here with a log line and degrades to
//! the heuristic result.

use crate::config::ExtractionConfig;
use crate::error::{ExtractError, ModelError};
use crate::output::{DocumentMetadata, ExtractedSections, ResumeExtraction};
use crate::pipeline::sections::{self, SectionId};
use crate::pipeline::text::DocumentSource;
use crate::pipeline::{experience, input, model, projects, skills, text};
use std::path::Path;
use tracing::{debug, info, warn};

/// Extract structured resume data from a PDF file.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Returns `Err(ExtractError)` only for fatal input problems: missing or
/// unreadable file, wrong magic bytes, undecryptable document. A readable
/// document always produces a result, possibly with empty record lists.
pub async fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ResumeExtraction, ExtractError> {
    let path = input::resolve_local(path.as_ref())?;
    let file_name = input::display_name(&path);
    info!("starting extraction: {file_name}");
    run(DocumentSource::Path(path), file_name, config).await
}

/// Extract structured resume data from in-memory PDF bytes.
///
/// The recommended API when the document arrives from an upload or a
/// database rather than the file system. `file_name` is a display name
/// carried through to the result's metadata.
pub async fn extract_from_bytes(
    bytes: impl Into<Vec<u8>>,
    file_name: impl Into<String>,
    config: &ExtractionConfig,
) -> Result<ResumeExtraction, ExtractError> {
    let bytes = bytes.into();
    let file_name = file_name.into();
    input::validate_magic(&bytes, &file_name)?;
    info!("starting extraction from {} bytes: {file_name}", bytes.len());
    run(DocumentSource::Bytes(bytes), file_name, config).await
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary tokio runtime internally.
pub fn extract_sync(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ResumeExtraction, ExtractError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ExtractError::Internal(format!("failed to create tokio runtime: {e}")))?
        .block_on(extract(path, config))
}

/// Read document metadata without extracting content.
///
/// Never touches the model service and needs no credential.
pub async fn inspect(path: impl AsRef<Path>) -> Result<DocumentMetadata, ExtractError> {
    let path = input::resolve_local(path.as_ref())?;
    let file_name = input::display_name(&path);
    text::extract_metadata(DocumentSource::Path(path), file_name, None).await
}

async fn run(
    source: DocumentSource,
    file_name: String,
    config: &ExtractionConfig,
) -> Result<ResumeExtraction, ExtractError> {
    let (raw_text, metadata) =
        text::extract_document(source, file_name, config.password.clone()).await?;

    let sections = resolve_sections(&raw_text, config).await;
    Ok(ResumeExtraction::from_sections(metadata, raw_text, sections))
}

/// Pick the extraction path and produce the three record lists.
///
/// Model first when configured; any model failure falls back to the
/// heuristics. Infallible by construction — the heuristic path always
/// yields a (possibly empty) result.
async fn resolve_sections(raw_text: &str, config: &ExtractionConfig) -> ExtractedSections {
    match model::ModelClient::from_config(config) {
        Ok(client) => adopt_or_fall_back(client.extract(raw_text).await, raw_text),
        Err(ModelError::NotConfigured) => {
            debug!("model service not configured; using heuristic path");
            heuristic_sections(raw_text)
        }
        Err(e) => {
            warn!("model client unavailable ({e}); using heuristic path");
            heuristic_sections(raw_text)
        }
    }
}

/// The selection rule itself: adopt a valid model result wholesale,
/// otherwise fall back. Kept as a pure function so the contract is
/// testable without a live service.
fn adopt_or_fall_back(
    model_result: Result<ExtractedSections, ModelError>,
    raw_text: &str,
) -> ExtractedSections {
    match model_result {
        Ok(sections) => {
            info!(
                skills = sections.skills.len(),
                experience = sections.experience.len(),
                projects = sections.projects.len(),
                "adopted model-path output"
            );
            sections
        }
        Err(e) => {
            warn!("model path failed ({e}); falling back to heuristic path");
            heuristic_sections(raw_text)
        }
    }
}

/// The deterministic extraction path: locate section spans, then decompose
/// each span with its section-specific heuristics.
///
/// Missing sections yield empty lists; this function cannot fail.
pub fn heuristic_sections(raw_text: &str) -> ExtractedSections {
    let spans = sections::locate_sections(raw_text);
    ExtractedSections {
        skills: skills::decompose(sections::section_text(raw_text, &spans, SectionId::Skills)),
        experience: experience::decompose(sections::section_text(
            raw_text,
            &spans,
            SectionId::Experience,
        )),
        projects: projects::decompose(sections::section_text(
            raw_text,
            &spans,
            SectionId::Projects,
        )),
    }
}
