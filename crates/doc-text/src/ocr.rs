//! OCR capability
//!
//! OCR is injected as an [`OcrEngine`] rather than probed from global state,
//! so extraction and its tests behave the same whether or not OCR tooling
//! is installed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ExtractError;

/// Rasterization resolution for scanned pages
pub const OCR_DPI: u32 = 200;

pub trait OcrEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_available(&self) -> bool;

    /// Recognize the text of the first `max_pages` pages of a PDF.
    fn recognize_pdf(&self, pdf: &[u8], max_pages: u32) -> Result<String, ExtractError>;
}

/// OCR switched off; scanned PDFs yield no text.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn recognize_pdf(&self, _pdf: &[u8], _max_pages: u32) -> Result<String, ExtractError> {
        Err(ExtractError::OcrUnavailable)
    }
}

/// OCR through the `pdftoppm` (poppler) and `tesseract` command-line tools
#[derive(Debug, Clone)]
pub struct TesseractCli {
    pdftoppm: PathBuf,
    tesseract: PathBuf,
    available: bool,
}

impl TesseractCli {
    /// Use the tools found on `PATH`.
    pub fn new() -> Self {
        Self::with_binaries("pdftoppm", "tesseract")
    }

    pub fn with_binaries(pdftoppm: impl Into<PathBuf>, tesseract: impl Into<PathBuf>) -> Self {
        let pdftoppm = pdftoppm.into();
        let tesseract = tesseract.into();
        let available = responds(&pdftoppm, "-v") && responds(&tesseract, "--version");
        if !available {
            warn!(
                pdftoppm = %pdftoppm.display(),
                tesseract = %tesseract.display(),
                "OCR tools not found; scanned PDFs will be unreadable"
            );
        }
        Self {
            pdftoppm,
            tesseract,
            available,
        }
    }

    fn rasterize(&self, pdf: &Path, prefix: &Path, max_pages: u32) -> Result<(), ExtractError> {
        let status = Command::new(&self.pdftoppm)
            .arg("-r")
            .arg(OCR_DPI.to_string())
            .arg("-png")
            .arg("-f")
            .arg("1")
            .arg("-l")
            .arg(max_pages.to_string())
            .arg(pdf)
            .arg(prefix)
            .status()?;
        if !status.success() {
            return Err(ExtractError::Ocr(format!("pdftoppm exited with {}", status)));
        }
        Ok(())
    }

    fn recognize_image(&self, image: &Path) -> Result<String, ExtractError> {
        let output = Command::new(&self.tesseract).arg(image).arg("stdout").output()?;
        if !output.status.success() {
            return Err(ExtractError::Ocr(format!(
                "tesseract failed on {}: {}",
                image.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractCli {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn recognize_pdf(&self, pdf: &[u8], max_pages: u32) -> Result<String, ExtractError> {
        if !self.available {
            return Err(ExtractError::OcrUnavailable);
        }

        let scratch = ScratchDir::create()?;
        let input = scratch.path().join("input.pdf");
        fs::write(&input, pdf)?;
        self.rasterize(&input, &scratch.path().join("page"), max_pages)?;

        // pdftoppm zero-pads page numbers, so name order is page order
        let mut pages: Vec<PathBuf> = fs::read_dir(scratch.path())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect();
        pages.sort();
        pages.truncate(max_pages as usize);
        debug!(pages = pages.len(), "Running OCR on rasterized pages");

        let texts = pages
            .iter()
            .map(|page| self.recognize_image(page))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(texts.join("\n"))
    }
}

fn responds(binary: &Path, flag: &str) -> bool {
    Command::new(binary).arg(flag).output().is_ok()
}

/// Temporary working directory removed on drop
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn create() -> Result<Self, ExtractError> {
        let path = std::env::temp_dir().join(format!("doc-text-ocr-{}", Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        Ok(Self(path))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.0) {
            debug!(path = %self.0.display(), error = %e, "Failed to remove OCR scratch dir");
        }
    }
}
