//! Page text extraction: a paginated PDF → one ordered text stream.
//!
//! ## Why sort blocks at all?
//!
//! PDF content order is storage order, not reading order. Two-column
//! resumes routinely interleave fragments of both columns, which destroys
//! the line-by-line heading scan downstream. Sorting each page's text
//! blocks by a quantized vertical band and then by horizontal position
//! linearizes the page left-to-right, top-to-bottom the way a human reads
//! it. The 5-point band tolerance merges blocks whose tops differ by less
//! than a typical line height, so slight baseline wobble does not reorder
//! a row.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` keeps pdfium work off the Tokio
//! worker threads. The document handle lives entirely inside the blocking
//! closure and is dropped (closed) on every exit path.

use crate::error::ExtractError;
use crate::output::DocumentMetadata;
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Vertical quantization band, in PDF points. Blocks whose top edges fall
/// in the same band belong to the same visual row.
const ROW_BAND_POINTS: f32 = 5.0;

/// One positioned text block, in top-down page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub text: String,
}

/// Where the document bytes come from.
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Order one page's blocks into reading order and join them with newlines.
///
/// Pure function over block geometry; separable from pdfium so the ordering
/// rule is testable without a real document.
fn order_page(mut blocks: Vec<TextBlock>) -> String {
    blocks.sort_by(|a, b| {
        let band_a = (a.y0 / ROW_BAND_POINTS).floor() as i64;
        let band_b = (b.y0 / ROW_BAND_POINTS).floor() as i64;
        band_a.cmp(&band_b).then_with(|| a.x0.total_cmp(&b.x0))
    });
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Linearize all pages into a single stream; pages separated by one blank
/// line.
pub fn linearize(pages: Vec<Vec<TextBlock>>) -> String {
    pages
        .into_iter()
        .map(order_page)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Extract the ordered text stream and document metadata.
///
/// The only error surface here is document-level unreadability; an empty or
/// text-free document is a valid (empty) stream.
pub async fn extract_document(
    source: DocumentSource,
    file_name: String,
    password: Option<String>,
) -> Result<(String, DocumentMetadata), ExtractError> {
    tokio::task::spawn_blocking(move || extract_blocking(source, file_name, password.as_deref()))
        .await
        .map_err(|e| ExtractError::Internal(format!("extraction task panicked: {e}")))?
}

fn extract_blocking(
    source: DocumentSource,
    file_name: String,
    password: Option<&str>,
) -> Result<(String, DocumentMetadata), ExtractError> {
    let pdfium = Pdfium::default();

    let document = match &source {
        DocumentSource::Path(path) => pdfium.load_pdf_from_file(path, password),
        DocumentSource::Bytes(bytes) => pdfium.load_pdf_from_byte_slice(bytes, password),
    }
    .map_err(|e| classify_open_error(e, &file_name, password))?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    info!("document loaded: {} pages", page_count);

    let mut page_blocks: Vec<Vec<TextBlock>> = Vec::with_capacity(page_count);
    for page in pages.iter() {
        let height = page.height().value;
        let text = page.text().map_err(|e| ExtractError::UnreadableDocument {
            name: file_name.clone(),
            detail: format!("{e:?}"),
        })?;

        let mut blocks = Vec::new();
        for segment in text.segments().iter() {
            let bounds = segment.bounds();
            let content = segment.text();
            if content.trim().is_empty() {
                continue;
            }
            // pdfium's y axis grows upward; flip to top-down so the row
            // ordering reads naturally.
            blocks.push(TextBlock {
                x0: bounds.left.value,
                y0: height - bounds.top.value,
                x1: bounds.right.value,
                y1: height - bounds.bottom.value,
                text: content,
            });
        }
        debug!("page yielded {} text blocks", blocks.len());
        page_blocks.push(blocks);
    }

    let metadata = read_metadata(&document, page_count, file_name);
    Ok((linearize(page_blocks), metadata))
}

/// Read document metadata without extracting any text.
///
/// Used by [`crate::extract::inspect`]; never touches the model service.
pub async fn extract_metadata(
    source: DocumentSource,
    file_name: String,
    password: Option<String>,
) -> Result<DocumentMetadata, ExtractError> {
    tokio::task::spawn_blocking(move || {
        let pdfium = Pdfium::default();
        let document = match &source {
            DocumentSource::Path(path) => pdfium.load_pdf_from_file(path, password.as_deref()),
            DocumentSource::Bytes(bytes) => {
                pdfium.load_pdf_from_byte_slice(bytes, password.as_deref())
            }
        }
        .map_err(|e| classify_open_error(e, &file_name, password.as_deref()))?;

        let page_count = document.pages().len() as usize;
        Ok(read_metadata(&document, page_count, file_name))
    })
    .await
    .map_err(|e| ExtractError::Internal(format!("metadata task panicked: {e}")))?
}

fn read_metadata(
    document: &PdfDocument<'_>,
    page_count: usize,
    file_name: String,
) -> DocumentMetadata {
    let tags = document.metadata();
    let get = |tag: PdfDocumentMetadataTagType| -> String {
        tags.get(tag)
            .map(|t| t.value().to_string())
            .unwrap_or_default()
    };

    DocumentMetadata {
        title: get(PdfDocumentMetadataTagType::Title),
        author: get(PdfDocumentMetadataTagType::Author),
        page_count,
        file_name,
    }
}

/// Map a pdfium open failure onto the crate's error vocabulary.
fn classify_open_error(e: PdfiumError, name: &str, password: Option<&str>) -> ExtractError {
    let err_str = format!("{e:?}");
    if err_str.contains("Password") || err_str.contains("password") {
        if password.is_some() {
            ExtractError::WrongPassword {
                name: name.to_string(),
            }
        } else {
            ExtractError::PasswordRequired {
                name: name.to_string(),
            }
        }
    } else {
        ExtractError::UnreadableDocument {
            name: name.to_string(),
            detail: err_str,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x0: f32, y0: f32, text: &str) -> TextBlock {
        TextBlock {
            x0,
            y0,
            x1: x0 + 100.0,
            y1: y0 + 12.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn two_column_page_linearizes_row_major() {
        // Storage order is column-major (whole left column, then right);
        // reading order must come out row-major.
        let page = vec![
            block(36.0, 100.0, "left-1"),
            block(36.0, 200.0, "left-2"),
            block(300.0, 101.0, "right-1"),
            block(300.0, 201.0, "right-2"),
        ];
        assert_eq!(linearize(vec![page]), "left-1\nright-1\nleft-2\nright-2");
    }

    #[test]
    fn blocks_in_same_band_sort_by_x() {
        let page = vec![
            block(300.0, 52.0, "b"),
            block(36.0, 50.0, "a"),
            block(500.0, 54.9, "c"),
        ];
        assert_eq!(linearize(vec![page]), "a\nb\nc");
    }

    #[test]
    fn band_boundary_splits_rows() {
        // 54.9 and 55.0 land in different 5-point bands even though they
        // are closer than the blocks above.
        let page = vec![block(300.0, 55.0, "below"), block(36.0, 54.9, "above")];
        assert_eq!(linearize(vec![page]), "above\nbelow");
    }

    #[test]
    fn pages_join_with_blank_line() {
        let pages = vec![vec![block(0.0, 0.0, "page one")], vec![block(0.0, 0.0, "page two")]];
        assert_eq!(linearize(pages), "page one\n\npage two");
    }

    #[test]
    fn empty_page_contributes_empty_segment() {
        let pages = vec![vec![block(0.0, 0.0, "only")], vec![]];
        assert_eq!(linearize(pages), "only\n\n");
    }
}
