use anyhow::Result;
use async_trait::async_trait;

/// Trait for extracting the plain-text content of an uploaded document
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Extract text content from the file (internal implementation)
    async fn to_text_impl(&self) -> Result<String>;

    /// Extract text content from the file (public API with size check)
    async fn to_text(&self) -> Result<String> {
        // An empty file has no text; skip the converter entirely
        if let Ok(metadata) = tokio::fs::metadata(self.path()).await {
            if metadata.len() == 0 {
                return Ok(String::new());
            }
        }

        self.to_text_impl().await
    }

    /// Get the file path
    fn path(&self) -> &std::path::Path;

    /// Get the file extension
    fn extension(&self) -> Option<&str>;
}
