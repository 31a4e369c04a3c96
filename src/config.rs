use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the hosted model. Usually left unset here and provided
    /// through the GEMINI_API_KEY / API_KEY environment variables instead.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
}

fn default_gemini_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract executable name or path
    #[serde(default = "default_ocr_executable")]
    pub executable: String,
    /// Tesseract language pack (Vietnamese legal documents by default)
    #[serde(default = "default_ocr_language")]
    pub language: String,
}

fn default_ocr_executable() -> String {
    "tesseract".to_string()
}

fn default_ocr_language() -> String {
    "vie".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// A PDF whose text layer trims to at most this many characters is
    /// treated as a scanned document and routed to OCR. Tunable: short but
    /// fully digital PDFs may need a lower value.
    #[serde(default = "default_min_pdf_text_chars")]
    pub min_pdf_text_chars: usize,
}

fn default_min_pdf_text_chars() -> usize {
    200
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            PathBuf::from("config/settings.toml"),
            PathBuf::from("./config/settings.toml"),
            PathBuf::from("~/.config/lexcheck/settings.toml"),
        ];

        for path in &default_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the Gemini API key: config value first, then the
    /// GEMINI_API_KEY environment variable, then the legacy API_KEY name.
    pub fn gemini_api_key(&self) -> Option<String> {
        self.gemini
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Startup presence check: every command that talks to the model calls
    /// this before doing any work.
    pub fn require_gemini_api_key(&self) -> Result<String> {
        self.gemini_api_key().context(
            "No Gemini API key configured. Set [gemini].api_key in settings.toml \
             or export GEMINI_API_KEY.",
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            ocr: OcrConfig::default(),
            extract: ExtractConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            executable: default_ocr_executable(),
            language: default_ocr_language(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_pdf_text_chars: default_min_pdf_text_chars(),
        }
    }
}
