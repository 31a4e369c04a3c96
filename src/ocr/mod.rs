pub mod tesseract;
pub mod r#trait;

pub use r#trait::OcrEngine;
pub use tesseract::TesseractOcr;
