use crate::config::Config;
use crate::ocr::OcrEngine;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// OCR engine backed by the Tesseract command-line tool
pub struct TesseractOcr {
    executable: String,
    language: String,
}

impl TesseractOcr {
    /// Create a new engine with the given executable and language pack
    pub fn new(executable: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.ocr.executable, &config.ocr.language)
    }

    /// Set the language pack (default from config: "vie")
    pub fn with_language(mut self, language: String) -> Self {
        self.language = language;
        self
    }
}

#[async_trait::async_trait]
impl OcrEngine for TesseractOcr {
    async fn recognize(&self, path: &Path) -> Result<String> {
        // `stdout` as the output base makes tesseract print recognized text
        // instead of writing a sidecar file.
        let output = Command::new(&self.executable)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .with_context(|| {
                format!(
                    "Failed to execute '{}'. Install Tesseract with the '{}' language pack: \
                     brew install tesseract tesseract-lang (macOS) or \
                     apt-get install tesseract-ocr tesseract-ocr-{} (Linux)",
                    self.executable, self.language, self.language
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "OCR failed for {}: {}",
                path.display(),
                stderr.trim()
            );
        }

        let text =
            String::from_utf8(output.stdout).context("OCR engine returned invalid UTF-8")?;

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tesseract_defaults_from_config() {
        let engine = TesseractOcr::from_config(&Config::default());
        assert_eq!(engine.executable, "tesseract");
        assert_eq!(engine.language, "vie");
    }

    #[test]
    fn test_tesseract_with_language() {
        let engine = TesseractOcr::new("tesseract", "vie").with_language("eng".to_string());
        assert_eq!(engine.language, "eng");
    }

    #[tokio::test]
    async fn test_missing_executable_mentions_install_hint() {
        let engine = TesseractOcr::new("tesseract-definitely-not-installed", "vie");
        let err = engine
            .recognize(Path::new("/tmp/nonexistent.png"))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Install Tesseract"));
    }
}
