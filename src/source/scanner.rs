// file: src/source/scanner.rs
// description: Directory walking and html file discovery
// reference: https://docs.rs/walkdir

use crate::config::InputConfig;
use crate::error::{HarvestError, Result};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    config: InputConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Walks the input directory recursively. Any walk error aborts the scan.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        self.scan_directory(&self.config.directory)
    }

    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        Validator::validate_input_directory(root)?;

        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(HarvestError::Traversal)?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !self.matches_extension(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            let size = entry.metadata().map_err(HarvestError::Traversal)?.len();

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        let total_bytes: u64 = files.iter().map(|f| f.size).sum();
        info!(
            "Found {} {} files ({} bytes)",
            files.len(),
            self.config.extension,
            total_bytes
        );
        Ok(files)
    }

    // Suffix match on the file name, so `page.HTML` and `page.html.bak` are skipped.
    fn matches_extension(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(&self.config.extension))
            .unwrap_or(false)
    }
}
