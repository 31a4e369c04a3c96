use crate::extractor::TextSource;
use crate::ocr::OcrEngine;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// PDF file handler: reads the text layer page by page, and falls back to
/// OCR when the layer is too sparse to be a real digital document.
pub struct PdfSource {
    path: std::path::PathBuf,
    extension: Option<String>,
    ocr: Arc<dyn OcrEngine>,
    /// Trimmed text-layer output at or below this many characters means the
    /// PDF is treated as scanned. Tunable via [extract].min_pdf_text_chars.
    min_text_chars: usize,
}

impl PdfSource {
    pub fn new(
        path: std::path::PathBuf,
        extension: Option<String>,
        ocr: Arc<dyn OcrEngine>,
        min_text_chars: usize,
    ) -> Self {
        Self {
            path,
            extension,
            ocr,
            min_text_chars,
        }
    }

    /// Concatenate the text layer of every page. Returns an empty string for
    /// PDFs with no extractable text (scanned documents).
    fn read_text_layer(path: &Path) -> Result<String> {
        use lopdf::Document;

        let doc = Document::load(path)
            .with_context(|| format!("Failed to load PDF: {}", path.display()))?;

        let mut text_content = String::new();
        for page_num in doc.get_pages().keys() {
            if let Ok(page_text) = doc.extract_text(&[*page_num]) {
                text_content.push_str(&page_text);
                text_content.push('\n');
            }
        }

        if text_content.trim().is_empty() {
            // Second text-layer attempt: pdf-extract handles some encodings
            // lopdf gives up on. Still not OCR; a scanned page stays empty.
            match pdf_extract::extract_text(path) {
                Ok(text) => Ok(text.trim().to_string()),
                Err(_) => Ok(String::new()),
            }
        } else {
            Ok(text_content.trim().to_string())
        }
    }
}

#[async_trait]
impl TextSource for PdfSource {
    async fn to_text_impl(&self) -> Result<String> {
        let path = self.path.clone();
        let text =
            tokio::task::spawn_blocking(move || Self::read_text_layer(&path)).await??;

        if text.chars().count() > self.min_text_chars {
            return Ok(text);
        }

        // Sparse or empty text layer: likely a scanned PDF. Discard the
        // layer and read the whole file through the OCR engine instead.
        eprintln!(
            "Warning: PDF text layer of {} is sparse ({} chars), falling back to OCR",
            self.path.display(),
            text.chars().count()
        );
        self.ocr.recognize(&self.path).await
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::NamedTempFile;

    struct CountingOcr {
        calls: AtomicUsize,
    }

    impl CountingOcr {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl OcrEngine for CountingOcr {
        async fn recognize(&self, _path: &Path) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("văn bản nhận dạng từ ảnh quét".to_string())
        }
    }

    /// Write a one-page PDF whose text layer contains `text`
    fn create_test_pdf(text: &str) -> (tempfile::TempPath, std::path::PathBuf) {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(&path).unwrap();

        (temp_file.into_temp_path(), path)
    }

    #[tokio::test]
    async fn test_pdf_with_dense_text_layer_skips_ocr() {
        let dense = "DIEU KHOAN CHUNG CUA HOP DONG MUA BAN. ".repeat(8);
        assert!(dense.len() > 200);
        let (_temp_path, pdf_path) = create_test_pdf(&dense);

        let ocr = CountingOcr::new();
        let source = PdfSource::new(pdf_path, Some("pdf".to_string()), ocr.clone(), 200);

        let text = source.to_text().await.unwrap();
        assert!(text.contains("DIEU KHOAN CHUNG"));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pdf_with_sparse_text_layer_falls_back_to_ocr() {
        let (_temp_path, pdf_path) = create_test_pdf("Trang 1");

        let ocr = CountingOcr::new();
        let source = PdfSource::new(pdf_path, Some("pdf".to_string()), ocr.clone(), 200);

        let text = source.to_text().await.unwrap();
        assert_eq!(text, "văn bản nhận dạng từ ảnh quét");
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pdf_threshold_is_tunable() {
        // The same sparse document passes a lowered threshold untouched
        let (_temp_path, pdf_path) = create_test_pdf("Trang 1");

        let ocr = CountingOcr::new();
        let source = PdfSource::new(pdf_path, Some("pdf".to_string()), ocr.clone(), 3);

        let text = source.to_text().await.unwrap();
        assert!(text.contains("Trang 1"));
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
    }
}
