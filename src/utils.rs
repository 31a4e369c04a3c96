/// Get file extension from path, lowercased and without the dot
pub fn get_extension(path: &std::path::Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Truncate document text for embedding into a prompt, cutting on a char
/// boundary so multi-byte Vietnamese text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension_docx() {
        let path = std::path::Path::new("/path/to/contract.docx");
        assert_eq!(get_extension(path), Some("docx".to_string()));
    }

    #[test]
    fn test_get_extension_lowercase() {
        let path = std::path::Path::new("/path/to/SCAN.PDF");
        assert_eq!(get_extension(path), Some("pdf".to_string()));
    }

    #[test]
    fn test_get_extension_no_extension() {
        let path = std::path::Path::new("/path/to/contract");
        assert_eq!(get_extension(path), None);
    }

    #[test]
    fn test_get_extension_multiple_dots() {
        let path = std::path::Path::new("/path/to/hop_dong.ban_cuoi.pdf");
        assert_eq!(get_extension(path), Some("pdf".to_string()));
    }

    #[test]
    fn test_truncate_chars_short_input() {
        assert_eq!(truncate_chars("ngắn", 100), "ngắn");
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let text = "điều khoản hợp đồng";
        let cut = truncate_chars(text, 9);
        assert_eq!(cut.chars().count(), 9);
        assert!(text.starts_with(cut));
    }
}
