use crate::error::ExtractError;
use crate::extractor::types::{DocxSource, ImageSource, PdfSource};
use crate::extractor::TextSource;
use crate::ocr::OcrEngine;
use crate::utils;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Image extensions routed straight to the OCR engine
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Factory for creating TextSource instances based on file extension
pub struct SourceFactory;

impl SourceFactory {
    /// Create a TextSource for `path`. Dispatches purely on the lowercased
    /// file-name extension; anything outside the supported set is an
    /// `ExtractError::UnsupportedFormat` naming the extension.
    pub fn create(
        path: PathBuf,
        ocr: Arc<dyn OcrEngine>,
        min_pdf_text_chars: usize,
    ) -> Result<Arc<dyn TextSource>> {
        // get_extension already lowercases
        let extension = utils::get_extension(&path);

        match extension.as_deref() {
            Some("docx") => Ok(Arc::new(DocxSource::new(path, extension))),
            Some("pdf") => Ok(Arc::new(PdfSource::new(
                path,
                extension,
                ocr,
                min_pdf_text_chars,
            ))),
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => {
                Ok(Arc::new(ImageSource::new(path, extension, ocr)))
            }
            other => Err(ExtractError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )
            .into()),
        }
    }
}
