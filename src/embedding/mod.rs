//! Text-embedding providers.
//!
//! The pipeline only depends on the narrow [`Embedder`] capability, so any
//! compliant provider can back the index without touching ranking logic.

mod hashed;
mod remote;

pub use hashed::{HashedEmbedder, DEFAULT_DIMENSIONS};
pub use remote::RemoteEmbedder;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding request failed: {0}")]
    Request(String),
    #[error("embedding provider returned status {0}")]
    Status(u16),
    #[error("embedding provider returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// A text-embedding provider. The same provider must be used for corpus
/// chunks and queries so the vectors are unit-comparable.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text into a fixed-length vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

    /// Embed a batch of texts, preserving order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// Dimensionality of the vectors this provider produces.
    fn dimensions(&self) -> usize;

    /// Short name for startup logging.
    fn provider_name(&self) -> &str;
}
