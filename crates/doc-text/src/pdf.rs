//! PDF text with OCR fallback for scanned documents

use tracing::{debug, info, warn};

use crate::error::ExtractError;
use crate::is_blank;
use crate::ocr::OcrEngine;

/// Pages sent to OCR when the text layer is empty
pub const MAX_OCR_PAGES: u32 = 20;

/// Text layer only, via pdf-extract
pub fn extract_text_layer(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Text layer first; OCR over the first [`MAX_OCR_PAGES`] pages when the
/// text layer fails or holds nothing but whitespace.
pub fn extract_pdf(data: &[u8], ocr: &dyn OcrEngine) -> Result<String, ExtractError> {
    let primary_error = match extract_text_layer(data) {
        Ok(text) if !is_blank(&text) => {
            debug!(chars = text.len(), "PDF text layer extracted");
            return Ok(text);
        }
        Ok(_) => {
            info!("PDF has no text layer, trying OCR");
            None
        }
        Err(e) => {
            warn!(error = %e, "PDF text extraction failed, trying OCR");
            Some(e)
        }
    };

    if !ocr.is_available() {
        debug!(engine = ocr.name(), "OCR unavailable");
        return Err(primary_error.unwrap_or(ExtractError::OcrUnavailable));
    }

    let text = ocr.recognize_pdf(data, MAX_OCR_PAGES)?;
    info!(engine = ocr.name(), chars = text.len(), "OCR fallback complete");
    Ok(text)
}
