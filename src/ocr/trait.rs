use anyhow::Result;
use std::path::Path;

/// Trait for OCR engines that can recognize text in image content.
/// The extractor routes standard image files here, and scanned PDFs whose
/// text layer came back too sparse to trust.
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize and return the text content of the file at `path`
    async fn recognize(&self, path: &Path) -> Result<String>;
}
