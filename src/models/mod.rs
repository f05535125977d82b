// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod result;
pub mod token;

pub use document::Document;
pub use result::HarvestResult;
pub use token::TokenSet;
