// file: src/pipeline/orchestrator.rs
// description: coordinates scanning, extraction, and writing one document at a time
// reference: sequential fail-fast workflow; the first failing document ends the run

use crate::config::Config;
use crate::error::Result;
use crate::exporter::TextWriter;
use crate::models::HarvestResult;
use crate::pipeline::processor::DocumentProcessor;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::source::{FileScanner, ScannedFile};
use crate::utils::logging::format_step;
use tracing::{error, info};

pub struct PipelineOrchestrator {
    config: Config,
    scanner: FileScanner,
    processor: DocumentProcessor,
    show_progress: bool,
    colored: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Self {
        let scanner = FileScanner::new(config.input.clone());
        let processor = DocumentProcessor::new(&config);

        Self {
            config,
            scanner,
            processor,
            show_progress: true,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn run(&self) -> Result<PipelineStats> {
        info!("Starting group harvest");

        let files = self.scanner.scan()?;
        let writer = TextWriter::new(&self.config.output)?;
        info!("Writing results to {}", writer.output_dir().display());

        let mut progress = if self.show_progress {
            ProgressTracker::with_color(files.len(), self.colored)
        } else {
            ProgressTracker::hidden()
        };

        for (index, file) in files.iter().enumerate() {
            progress.set_message(format_step(index + 1, files.len(), &file.relative_path));

            if let Err(err) = self.process_one(file, &writer, &mut progress) {
                progress.abandon();
                error!("Stopping at {}: {}", file.path.display(), err);
                return Err(err.in_document(&file.path));
            }
        }

        progress.finish();
        let stats = progress.get_stats();
        info!(
            "Harvest complete: {} documents, {} tokens, {} bytes in {}s",
            stats.files_processed,
            stats.tokens_written,
            stats.total_bytes_processed,
            stats.duration_secs
        );
        Ok(stats)
    }

    fn process_one(
        &self,
        file: &ScannedFile,
        writer: &TextWriter,
        progress: &mut ProgressTracker,
    ) -> Result<()> {
        let (document, result) = self.processor.process(file)?;

        if self.config.output.echo_tokens {
            progress.suspend(|| echo_tokens(&result));
        }

        writer.write(&result)?;
        progress.record_document(document.size(), result.tokens.len());
        Ok(())
    }
}

fn echo_tokens(result: &HarvestResult) {
    println!("Extracted numbers ({}):", result.tokens.len());
    for token in &result.tokens {
        println!("{}", token);
    }
}
