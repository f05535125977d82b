// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod processor;
mod progress;

pub use orchestrator::PipelineOrchestrator;
pub use processor::DocumentProcessor;
pub use progress::{PipelineStats, ProgressTracker};
