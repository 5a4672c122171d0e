mod file_config;

pub use file_config::{EmbedderFileConfig, FileConfig};

use crate::embedding::DEFAULT_DIMENSIONS;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// Mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_csv: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub embedder_url: Option<String>,
    pub embedder_model: String,
    pub embedder_timeout_sec: u64,
    pub embedding_dimensions: usize,
    pub initial_k: usize,
    pub final_k: usize,
}

/// Resolved embedding provider settings. A missing URL selects the
/// deterministic local provider.
#[derive(Debug, Clone)]
pub struct EmbedderSettings {
    pub url: Option<String>,
    pub model: String,
    pub timeout_sec: u64,
    pub dimensions: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_csv: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub embedder: EmbedderSettings,
    pub initial_k: usize,
    pub final_k: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_csv = file
            .catalog_csv
            .map(PathBuf::from)
            .or_else(|| cli.catalog_csv.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_csv must be specified via CLI or in config file")
            })?;

        if !catalog_csv.exists() {
            bail!("Catalog file does not exist: {:?}", catalog_csv);
        }
        if !catalog_csv.is_file() {
            bail!("catalog_csv is not a file: {:?}", catalog_csv);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let embedder_file = file.embedder.unwrap_or_default();
        let embedder = EmbedderSettings {
            url: embedder_file.url.or_else(|| cli.embedder_url.clone()),
            model: embedder_file
                .model
                .unwrap_or_else(|| cli.embedder_model.clone()),
            timeout_sec: embedder_file
                .timeout_sec
                .unwrap_or(cli.embedder_timeout_sec),
            dimensions: embedder_file
                .dimensions
                .unwrap_or(cli.embedding_dimensions),
        };
        if embedder.dimensions == 0 {
            bail!("Embedding dimensions must be greater than zero");
        }

        let initial_k = file.initial_k.unwrap_or(cli.initial_k);
        let final_k = file.final_k.unwrap_or(cli.final_k);
        if initial_k == 0 {
            bail!("initial_k must be greater than zero");
        }
        if final_k == 0 {
            bail!("final_k must be greater than zero");
        }

        Ok(Self {
            catalog_csv,
            port,
            logging_level,
            embedder,
            initial_k,
            final_k,
        })
    }
}

impl Default for EmbedderSettings {
    fn default() -> Self {
        Self {
            url: None,
            model: "nomic-embed-text".to_string(),
            timeout_sec: 300,
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
