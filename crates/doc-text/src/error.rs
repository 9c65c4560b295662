use thiserror::Error;

/// Text extraction errors. Callers treat every variant the same way: the
/// document could not be read.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Text decode error: {0}")]
    Decode(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("OCR is not available in this build")]
    OcrUnavailable,

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
