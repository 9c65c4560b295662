//! Plain-text extraction for uploaded contracts
//!
//! Decodes `.txt`, `.docx` and `.pdf` uploads to raw text. Scanned PDFs fall
//! back to an injected [`OcrEngine`] limited to the first
//! [`MAX_OCR_PAGES`] pages.
//!
//! Extraction is blocking (PDF parsing, OCR subprocesses); async callers
//! should run it on a blocking worker.

pub mod docx;
pub mod error;
pub mod ocr;
pub mod pdf;

use std::sync::Arc;

use tracing::debug;

pub use error::ExtractError;
pub use ocr::{DisabledOcr, OcrEngine, TesseractCli};
pub use pdf::MAX_OCR_PAGES;

/// Upload format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Docx,
    Pdf,
    Unknown,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Self {
        let name = filename.to_lowercase();
        if name.ends_with(".txt") {
            DocumentKind::Text
        } else if name.ends_with(".docx") {
            DocumentKind::Docx
        } else if name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else {
            DocumentKind::Unknown
        }
    }
}

/// True when text holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Text extractor with an injected OCR capability
#[derive(Clone)]
pub struct TextExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl TextExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extractor that never runs OCR
    pub fn without_ocr() -> Self {
        Self::new(Arc::new(DisabledOcr))
    }

    pub fn ocr(&self) -> &dyn OcrEngine {
        self.ocr.as_ref()
    }

    /// Decode an upload to raw text.
    ///
    /// `.txt` never fails; invalid UTF-8 bytes are dropped. Files with an unknown
    /// extension must be valid UTF-8.
    pub fn extract(&self, filename: &str, data: &[u8]) -> Result<String, ExtractError> {
        let kind = DocumentKind::from_filename(filename);
        debug!(?kind, bytes = data.len(), "Extracting document text");

        match kind {
            DocumentKind::Text => Ok(decode_dropping_invalid(data)),
            DocumentKind::Docx => docx::extract_docx(data),
            DocumentKind::Pdf => pdf::extract_pdf(data, self.ocr.as_ref()),
            DocumentKind::Unknown => String::from_utf8(data.to_vec())
                .map_err(|e| ExtractError::Decode(format!("{}: {}", filename, e))),
        }
    }
}

/// Decode UTF-8, skipping byte sequences that are not valid UTF-8.
fn decode_dropping_invalid(data: &[u8]) -> String {
    data.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::without_ocr()
    }
}
