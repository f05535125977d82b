// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub files_processed: usize,
    pub tokens_written: usize,
    pub total_bytes_processed: u64,
    pub duration_secs: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self::from_bar(create_progress_bar(total_files as u64, colored))
    }

    /// Tracker that counts without drawing anything.
    pub fn hidden() -> Self {
        Self::from_bar(ProgressBar::hidden())
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn record_document(&mut self, bytes: u64, tokens: usize) {
        self.stats.files_processed += 1;
        self.stats.total_bytes_processed += bytes;
        self.stats.tokens_written += tokens;
        self.bar.inc(1);
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    /// Runs `f` with the bar cleared so stdout lines are not interleaved with it.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_with_message("Processing complete");
        }
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("Processing aborted");
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            duration_secs: self.start_time.elapsed().as_secs(),
            ..self.stats.clone()
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" })),
        Err(err) => tracing::warn!("Invalid progress template, using default: {}", err),
    }
    bar
}
