// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input directory {} does not exist; create it and put the HTML files inside", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Group name not found")]
    LabelNotFound,

    #[error("Failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Processing {} failed: {source}", .path.display())]
    Document {
        path: PathBuf,
        source: Box<HarvestError>,
    },
}

impl HarvestError {
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        HarvestError::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through `Document` wrappers.
    pub fn root(&self) -> &HarvestError {
        match self {
            HarvestError::Document { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wrapper_names_path_and_cause() {
        let err = HarvestError::LabelNotFound.in_document("html_files/a.html");
        assert_eq!(
            err.to_string(),
            "Processing html_files/a.html failed: Group name not found"
        );
        assert!(matches!(err.root(), HarvestError::LabelNotFound));
    }
}
