// file: src/exporter/mod.rs
// description: result writer module exports

pub mod text;

pub use text::TextWriter;
