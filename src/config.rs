// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarvestError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub directory: PathBuf,
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub suffix: String,
    pub header_prefix: String,
    pub echo_tokens: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub label_element_id: String,
    /// Restrict the label lookup to one tag name (e.g. `span`).
    #[serde(default)]
    pub label_tag: Option<String>,
}

impl Config {
    /// Layers built-in defaults, the optional TOML file, then `GROUP_HARVEST__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default(
                "input.directory",
                defaults.input.directory.to_string_lossy().to_string(),
            )
            .and_then(|b| b.set_default("input.extension", defaults.input.extension))
            .and_then(|b| {
                b.set_default(
                    "output.directory",
                    defaults.output.directory.to_string_lossy().to_string(),
                )
            })
            .and_then(|b| b.set_default("output.suffix", defaults.output.suffix))
            .and_then(|b| b.set_default("output.header_prefix", defaults.output.header_prefix))
            .and_then(|b| b.set_default("output.echo_tokens", defaults.output.echo_tokens))
            .and_then(|b| {
                b.set_default(
                    "extraction.label_element_id",
                    defaults.extraction.label_element_id,
                )
            })
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GROUP_HARVEST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                directory: PathBuf::from("./html_files"),
                extension: ".html".to_string(),
            },
            output: OutputConfig {
                directory: PathBuf::from("."),
                suffix: ".txt".to_string(),
                header_prefix: "群名称: ".to_string(),
                echo_tokens: true,
            },
            extraction: ExtractionConfig {
                label_element_id: "groupTit".to_string(),
                label_tag: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.extension.is_empty() {
            return Err(HarvestError::Config(
                "input.extension must not be empty".to_string(),
            ));
        }

        if self.output.suffix.is_empty() {
            return Err(HarvestError::Config(
                "output.suffix must not be empty".to_string(),
            ));
        }

        if self.extraction.label_element_id.is_empty() {
            return Err(HarvestError::Config(
                "extraction.label_element_id must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
