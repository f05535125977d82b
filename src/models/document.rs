// file: src/models/document.rs
// description: one input html file loaded into memory
// reference: internal data structures

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub relative_path: String,
    pub content: String,
}

impl Document {
    pub fn new(path: PathBuf, relative_path: String, content: String) -> Self {
        Self {
            path,
            relative_path,
            content,
        }
    }

    /// Decodes raw bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(path: PathBuf, relative_path: String, bytes: &[u8]) -> Self {
        let content = String::from_utf8_lossy(bytes).into_owned();
        Self::new(path, relative_path, content)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new(
            PathBuf::from("html_files/group.html"),
            "group.html".to_string(),
            "<p>12345</p>".to_string(),
        );

        assert_eq!(doc.relative_path, "group.html");
        assert_eq!(doc.size(), 12);
    }

    #[test]
    fn test_from_bytes_is_lossy() {
        let doc = Document::from_bytes(
            PathBuf::from("bad.html"),
            "bad.html".to_string(),
            b"abc \xff 123456",
        );

        assert!(doc.content.starts_with("abc "));
        assert!(doc.content.ends_with(" 123456"));
    }
}
