//! Input validation: make sure bytes claiming to be a PDF look like one
//! before pdfium sees them.
//!
//! Checking the `%PDF` magic up front turns "pdfium failed with an opaque
//! code" into a precise, caller-actionable error, and keeps obviously wrong
//! uploads (docx, images) from ever reaching the native library.

use crate::error::ExtractError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Resolve a local file path, validating existence, readability, and PDF
/// magic bytes.
pub fn resolve_local(path: &Path) -> Result<PathBuf, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != PDF_MAGIC {
                return Err(ExtractError::NotAPdf {
                    name: display_name(path),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ExtractError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("resolved local PDF: {}", path.display());
    Ok(path.to_path_buf())
}

/// Validate the magic bytes of an in-memory document.
pub fn validate_magic(bytes: &[u8], name: &str) -> Result<(), ExtractError> {
    if bytes.len() < 4 {
        return Err(ExtractError::UnreadableDocument {
            name: name.to_string(),
            detail: format!("only {} bytes", bytes.len()),
        });
    }
    if &bytes[..4] != PDF_MAGIC {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[..4]);
        return Err(ExtractError::NotAPdf {
            name: name.to_string(),
            magic,
        });
    }
    Ok(())
}

/// File name portion of a path, for error messages and metadata.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
