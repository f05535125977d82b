// file: src/pipeline/processor.rs
// description: turns one scanned html file into a label and token set
// reference: reads the file once and runs both extractors over the same text

use crate::config::Config;
use crate::error::{HarvestError, Result};
use crate::extractor::{LabelExtractor, TokenHarvester};
use crate::models::{Document, HarvestResult};
use crate::source::ScannedFile;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub struct DocumentProcessor {
    label_extractor: LabelExtractor,
    harvester: TokenHarvester,
}

impl DocumentProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            label_extractor: LabelExtractor::from_config(&config.extraction),
            harvester: TokenHarvester::new(),
        }
    }

    pub fn load(&self, scanned_file: &ScannedFile) -> Result<Document> {
        let bytes = read_file_bytes(&scanned_file.path)?;
        Ok(Document::from_bytes(
            scanned_file.path.clone(),
            scanned_file.relative_path.clone(),
            &bytes,
        ))
    }

    pub fn process(&self, scanned_file: &ScannedFile) -> Result<(Document, HarvestResult)> {
        info!("Processing file: {}", scanned_file.path.display());

        let document = self.load(scanned_file)?;
        let result = self.extract(&document)?;
        Ok((document, result))
    }

    pub fn extract(&self, document: &Document) -> Result<HarvestResult> {
        let label = self.label_extractor.extract(&document.content)?;
        let tokens = self.harvester.harvest(&document.content);

        debug!(
            "Extracted label '{}' and {} tokens from {}",
            label,
            tokens.len(),
            document.relative_path
        );

        Ok(HarvestResult::new(label, tokens))
    }
}

fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| HarvestError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}
