//! Plain-text extraction from uploaded resumes.
//!
//! - PDF: `pdf-extract`.
//! - DOCX: `word/document.xml` from the zip container, `<w:t>` runs joined per paragraph.
//!
//! Both are CPU-bound; callers run `extract_text` inside `spawn_blocking`.

use std::io::{Cursor, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const DOCX_BODY_PART: &str = "word/document.xml";

/// Text runs, paragraph ends, tabs and manual line breaks in WordprocessingML.
static DOCX_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:br/>|<w:cr/>")
        .expect("DOCX token regex is valid")
});

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Failed to open DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to read DOCX body: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Decides by lower-cased extension; anything but `.pdf` / `.docx` is unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => Ok(pdf_extract::extract_text_from_mem(bytes)?),
        DocumentKind::Docx => extract_docx_text(bytes),
    }
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;
    Ok(docx_xml_to_text(&xml))
}

fn docx_xml_to_text(xml: &str) -> String {
    let mut text = String::new();
    for token in DOCX_TOKEN.captures_iter(xml) {
        match token.get(1) {
            Some(run) => text.push_str(&unescape_xml(run.as_str())),
            None => match &token[0] {
                "<w:tab/>" => text.push('\t'),
                _ => text.push('\n'),
            },
        }
    }
    text.trim().to_string()
}

fn unescape_xml(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
