use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub catalog_csv: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub initial_k: Option<usize>,
    pub final_k: Option<usize>,

    // Embedding provider section
    pub embedder: Option<EmbedderFileConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct EmbedderFileConfig {
    /// Base URL of a remote embedding service. Absent selects the
    /// deterministic local provider.
    pub url: Option<String>,
    pub model: Option<String>,
    pub timeout_sec: Option<u64>,
    pub dimensions: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
