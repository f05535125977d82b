// file: src/utils/validation.rs
// description: input and output path validation helpers
// reference: input validation patterns

use crate::error::{HarvestError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_input_directory(path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(HarvestError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    pub fn validate_output_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(HarvestError::Config(format!(
                "Output path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Shortens long labels for log lines without splitting a character.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
