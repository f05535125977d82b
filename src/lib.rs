// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod utils;

pub use config::{Config, ExtractionConfig, InputConfig, OutputConfig};
pub use error::{HarvestError, Result};
pub use exporter::TextWriter;
pub use extractor::{LabelExtractor, TokenHarvester, extract_label, harvest_tokens};
pub use models::{Document, HarvestResult, TokenSet};
pub use pipeline::{DocumentProcessor, PipelineOrchestrator, PipelineStats, ProgressTracker};
pub use source::{FileScanner, ScannedFile};
pub use utils::Validator;
