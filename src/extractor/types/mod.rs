pub mod docx;
pub mod image;
pub mod pdf;

pub use docx::DocxSource;
pub use image::ImageSource;
pub use pdf::PdfSource;
