// file: src/exporter/text.rs
// description: writes one label-named text file per harvested document

use crate::config::OutputConfig;
use crate::error::{HarvestError, Result};
use crate::models::HarvestResult;
use crate::utils::Validator;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TextWriter {
    output_dir: PathBuf,
    suffix: String,
    header_prefix: String,
}

impl TextWriter {
    pub fn new(config: &OutputConfig) -> Result<Self> {
        Validator::validate_output_directory(&config.directory)?;
        fs::create_dir_all(&config.directory).map_err(|source| HarvestError::WriteFailure {
            path: config.directory.clone(),
            source,
        })?;

        Ok(Self {
            output_dir: config.directory.clone(),
            suffix: config.suffix.clone(),
            header_prefix: config.header_prefix.clone(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn destination(&self, result: &HarvestResult) -> PathBuf {
        self.output_dir.join(result.output_file_name(&self.suffix))
    }

    /// Creates or truncates the destination and returns its path.
    pub fn write(&self, result: &HarvestResult) -> Result<PathBuf> {
        let path = self.destination(result);
        let body = result.render(&self.header_prefix);

        debug!("Writing {} bytes to {}", body.len(), path.display());
        fs::write(&path, body).map_err(|source| HarvestError::WriteFailure {
            path: path.clone(),
            source,
        })?;

        info!(
            "Saved {} tokens for '{}' to {}",
            result.tokens.len(),
            Validator::truncate_text(&result.label, 40),
            path.display()
        );
        Ok(path)
    }
}
