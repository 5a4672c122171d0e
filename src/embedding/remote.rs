//! HTTP client for an external embedding service.

use super::{EmbedError, Embedder};
use async_trait::async_trait;
use std::time::Duration;

/// Client for an Ollama-style embedding endpoint
/// (`POST <base_url>/api/embeddings` with `{"model", "prompt"}`).
pub struct RemoteEmbedder {
    client: reqwest::Client,
    base_url: String,
    model: String,
    dimensions: usize,
}

impl RemoteEmbedder {
    /// Create a new remote embedder.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the embedding service (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "nomic-embed-text")
    /// * `dimensions` - Vector length the model produces
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, model: String, dimensions: usize, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            model,
            dimensions,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Embedder for RemoteEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let url = format!("{}/api/embeddings", self.base_url);
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| EmbedError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(EmbedError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| EmbedError::MalformedResponse(err.to_string()))?;

        let vector: Vec<f32> = body["embedding"]
            .as_array()
            .ok_or_else(|| {
                EmbedError::MalformedResponse("missing \"embedding\" array".to_string())
            })?
            .iter()
            .map(|value| value.as_f64().unwrap_or(0.0) as f32)
            .collect();

        if vector.is_empty() {
            return Err(EmbedError::MalformedResponse(
                "empty embedding vector".to_string(),
            ));
        }

        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "remote"
    }
}
