use crate::extractor::TextSource;
use crate::ocr::OcrEngine;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Image file handler: text comes entirely from the OCR engine
pub struct ImageSource {
    path: std::path::PathBuf,
    extension: Option<String>,
    ocr: Arc<dyn OcrEngine>,
}

impl ImageSource {
    pub fn new(
        path: std::path::PathBuf,
        extension: Option<String>,
        ocr: Arc<dyn OcrEngine>,
    ) -> Self {
        Self {
            path,
            extension,
            ocr,
        }
    }
}

#[async_trait]
impl TextSource for ImageSource {
    async fn to_text_impl(&self) -> Result<String> {
        self.ocr.recognize(&self.path).await
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
