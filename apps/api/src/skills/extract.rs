//! Document text extraction. Best effort: internal failures are logged and
//! flattened to an empty string, never returned to the caller.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use thiserror::Error;
use tracing::warn;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Picks the format from the text after the last `.`; a name without a
    /// dot is treated as its own extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit('.').next().unwrap_or(filename);
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Returns the document's plain text, or an empty string if it cannot be read.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> String {
    let result = match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes),
        DocumentKind::Docx => extract_docx_text(bytes),
    };
    result.unwrap_or_else(|e| {
        warn!("Error extracting text from {kind:?}: {e}");
        String::new()
    })
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    // pdf-extract panics on some malformed inputs.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(result) => result.map_err(|e| DocumentError::Pdf(e.to_string())),
        Err(_) => Err(DocumentError::Pdf("parser panicked".to_string())),
    }
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;
    body_paragraph_text(&xml)
}

/// Text of the top-level body paragraphs, one `\n` after each.
/// Paragraphs inside tables and text boxes are skipped.
fn body_paragraph_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut paragraph = String::new();
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_run_text = false;
    let mut nested_depth = 0usize; // w:tbl / w:txbxContent

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => nested_depth += 1,
                b"p" if nested_depth == 0 => {
                    in_paragraph = true;
                    paragraph.clear();
                }
                b"r" => in_run = true,
                b"t" => in_run_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => nested_depth = nested_depth.saturating_sub(1),
                b"p" if nested_depth == 0 && in_paragraph => {
                    text.push_str(&paragraph);
                    text.push('\n');
                    in_paragraph = false;
                }
                b"r" => in_run = false,
                b"t" => in_run_text = false,
                _ => {}
            },
            // Only run-level tabs and breaks; w:pPr/w:tabs/w:tab is a tab stop definition.
            Event::Empty(e) if in_paragraph && in_run && nested_depth == 0 => {
                match e.local_name().as_ref() {
                    b"tab" => paragraph.push('\t'),
                    b"br" | b"cr" => paragraph.push('\n'),
                    _ => {}
                }
            }
            Event::Empty(e) if nested_depth == 0 && e.local_name().as_ref() == b"p" => {
                text.push('\n');
            }
            Event::Text(t) if in_paragraph && in_run_text && nested_depth == 0 => {
                paragraph.push_str(&t.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
