pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod gateway;
pub mod models;
pub mod ocr;
pub mod service;
pub mod utils;

pub use error::{ExtractError, GatewayError};
pub use extractor::{SourceFactory, TextSource};
pub use gateway::{GeminiProvider, GenerativeProvider, ResponseFormat};
pub use ocr::{OcrEngine, TesseractOcr};
pub use service::Analyzer;
