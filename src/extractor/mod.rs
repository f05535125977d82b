// file: src/extractor/mod.rs
// description: label and token extraction module exports
// reference: internal module structure

pub mod label;
pub mod patterns;
pub mod tokens;

pub use label::{LabelExtractor, extract_label};
pub use tokens::{TokenHarvester, harvest_tokens};
