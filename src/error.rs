//! Error types for the resume-extract library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ExtractError`] — **Fatal**: the extraction cannot proceed at all
//!   (bad input file, unreadable document, wrong password). Returned as
//!   `Err(ExtractError)` from the top-level `extract*` functions.
//!
//! * [`ModelError`] — **Non-fatal**: the model-assisted path failed (no
//!   credential configured, network error, unparseable reply). Never crosses
//!   the public API; the orchestrator absorbs it and re-runs extraction
//!   through the deterministic heuristic path instead.
//!
//! The separation encodes the routing contract directly in the type system:
//! any function returning `Result<_, ModelError>` has a fallback, any
//! function returning `Result<_, ExtractError>` does not.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the resume-extract library.
///
/// Model-path failures use [`ModelError`] and trigger the heuristic
/// fallback rather than being propagated here.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{name}'\nFirst bytes: {magic:?}")]
    NotAPdf { name: String, magic: [u8; 4] },

    // ── Document errors ───────────────────────────────────────────────────
    /// The byte stream could not be opened as a paginated document.
    #[error("Document '{name}' is unreadable: {detail}")]
    UnreadableDocument { name: String, detail: String },

    /// PDF requires a password but none was provided.
    #[error("Document '{name}' is encrypted and requires a password")]
    PasswordRequired { name: String },

    /// A password was provided but it is wrong.
    #[error("Wrong password for document '{name}'")]
    WrongPassword { name: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal failure of the model-assisted extraction path.
///
/// Every variant means the same thing to the orchestrator: use the
/// heuristic path. The variants exist so logs can distinguish "no key
/// configured" (expected, routine) from "the service misbehaved".
#[derive(Debug, Error)]
pub enum ModelError {
    /// No model-service credential is configured. This is a routing signal,
    /// not a fault.
    #[error("Model service not configured (set GEMINI_API_KEY or ExtractionConfig::api_key)")]
    NotConfigured,

    /// The HTTP call itself failed (network, quota, non-2xx status).
    #[error("Model service call failed: {0}")]
    CallFailed(String),

    /// The call exceeded the configured timeout.
    #[error("Model service call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The service replied, but the reply was not the requested JSON shape.
    #[error("Model reply was not usable: {0}")]
    InvalidReply(String),
}
