// file: src/source/mod.rs
// description: Document discovery module exports
// reference: Internal module structure

pub mod scanner;

pub use scanner::{FileScanner, ScannedFile};
