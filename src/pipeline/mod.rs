//! Pipeline stages for resume extraction.
//!
//! Each submodule implements exactly one transformation step, keeping every
//! stage independently testable.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ text ──▶ model ─────────────────▶ records
//!                └──▶ sections ──▶ skills ──▶ records
//!                                 experience
//!                                 projects
//! ```
//!
//! 1. [`input`]      — validate the user-supplied path or byte stream
//! 2. [`text`]       — linearize pdfium text blocks into one ordered stream;
//!    runs in `spawn_blocking` because pdfium is not async-safe
//! 3. [`model`]      — best-effort model-service extraction; the only stage
//!    with network I/O
//! 4. [`sections`]   — locate skills/experience/projects spans by heading
//! 5. [`skills`] / [`experience`] / [`projects`] — decompose one span each
//!    into typed records
//!
//! The model stage and the sections+decomposer stages are alternatives, not
//! a sequence: the orchestrator in [`crate::extract`] adopts exactly one
//! path's output per call.

pub mod experience;
pub mod input;
pub mod model;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod text;
