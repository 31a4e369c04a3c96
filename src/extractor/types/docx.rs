use crate::extractor::TextSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;

/// DOCX file handler. A .docx is a ZIP container; the document body lives in
/// word/document.xml with visible text inside `w:t` elements.
pub struct DocxSource {
    path: std::path::PathBuf,
    extension: Option<String>,
}

impl DocxSource {
    pub fn new(path: std::path::PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }

    /// Collect the character data of every `w:t` run, one line per `w:p`
    /// paragraph.
    fn text_from_document_xml(xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_run = false;

        loop {
            match reader.read_event().context("Failed to parse word/document.xml")? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_run = false,
                    b"w:p" => text.push('\n'),
                    _ => {}
                },
                Event::Text(e) if in_run => {
                    let run = e.unescape().context("Invalid character data in w:t run")?;
                    text.push_str(&run);
                }
                Event::Empty(e) if e.name().as_ref() == b"w:br" => text.push('\n'),
                Event::Empty(e) if e.name().as_ref() == b"w:tab" => text.push('\t'),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl TextSource for DocxSource {
    async fn to_text_impl(&self) -> Result<String> {
        let path = self.path.clone();
        let text = tokio::task::spawn_blocking(move || -> Result<String> {
            use std::fs::File;
            use zip::ZipArchive;

            let file = File::open(&path)
                .with_context(|| format!("Failed to open DOCX file: {}", path.display()))?;

            let mut archive = ZipArchive::new(file)
                .with_context(|| format!("Not a valid DOCX container: {}", path.display()))?;

            let mut document = archive
                .by_name("word/document.xml")
                .with_context(|| format!("DOCX has no document body: {}", path.display()))?;

            let mut xml = String::new();
            document
                .read_to_string(&mut xml)
                .context("Failed to read word/document.xml")?;

            Self::text_from_document_xml(&xml)
        })
        .await??;

        Ok(text)
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
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>HỢP ĐỒNG MUA BÁN TÀI SẢN</w:t></w:r></w:p>
    <w:p><w:r><w:t>Bên A: Công ty TNHH An Phú</w:t></w:r><w:r><w:t xml:space="preserve"> — đại diện</w:t></w:r></w:p>
    <w:p><w:r><w:t>Điều 1: Đối tượng &amp; phạm vi</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn create_test_docx() -> (tempfile::TempPath, std::path::PathBuf) {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        let file = std::fs::File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("[Content_Types].xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<Types/>").unwrap();
        zip.start_file("word/document.xml", FileOptions::default())
            .unwrap();
        zip.write_all(DOCUMENT_XML.as_bytes()).unwrap();
        zip.finish().unwrap();

        (temp_file.into_temp_path(), path)
    }

    #[tokio::test]
    async fn test_docx_extraction() {
        let (_temp_path, docx_path) = create_test_docx();
        let source = DocxSource::new(docx_path.clone(), Some("docx".to_string()));

        let text = source.to_text().await.unwrap();
        assert!(text.contains("HỢP ĐỒNG MUA BÁN TÀI SẢN"));
        // Adjacent runs in one paragraph stay on one line
        assert!(text.contains("Công ty TNHH An Phú — đại diện"));
        // Entities in character data are unescaped
        assert!(text.contains("Đối tượng & phạm vi"));
        assert_eq!(text.lines().count(), 3);

        assert_eq!(source.path(), docx_path);
        assert_eq!(source.extension(), Some("docx"));
    }

    #[tokio::test]
    async fn test_docx_without_document_body_fails() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("word/other.xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<w:document/>").unwrap();
        zip.finish().unwrap();

        let source = DocxSource::new(path, Some("docx".to_string()));
        let err = source.to_text().await.unwrap_err();
        assert!(err.to_string().contains("no document body"));
    }

    #[tokio::test]
    async fn test_docx_not_a_zip_fails() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), b"plain bytes, not a container").unwrap();

        let source = DocxSource::new(temp_file.path().to_path_buf(), Some("docx".to_string()));
        assert!(source.to_text().await.is_err());
    }
}
