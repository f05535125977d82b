// file: src/models/result.rs
// description: label and token set produced for one document
// reference: internal data structures

use crate::models::TokenSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestResult {
    pub label: String,
    pub tokens: TokenSet,
}

impl HarvestResult {
    pub fn new(label: String, tokens: TokenSet) -> Self {
        Self { label, tokens }
    }

    /// Label with every space replaced by an underscore.
    pub fn file_stem(&self) -> String {
        self.label.replace(' ', "_")
    }

    pub fn output_file_name(&self, suffix: &str) -> String {
        format!("{}{}", self.file_stem(), suffix)
    }

    /// Header line followed by one token per line, each newline-terminated.
    pub fn render(&self, header_prefix: &str) -> String {
        let mut body = format!("{}{}\n", header_prefix, self.label);
        for token in &self.tokens {
            body.push_str(token);
            body.push('\n');
        }
        body
    }
}
