//! Semantic retrieval: corpus chunking, vector index and the retriever
//! that maps a free-text query back to catalog identifiers.

mod corpus;
mod retriever;
mod vector_index;

pub use corpus::{build_corpus, split_corpus, CorpusChunk, CHUNK_OVERLAP, CHUNK_SIZE};
pub use retriever::{SemanticRetriever, DEFAULT_INITIAL_K};
pub use vector_index::{InMemoryVectorIndex, VectorIndex};

use crate::embedding::EmbedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexBuildError {
    #[error("catalog produced an empty corpus")]
    EmptyCorpus,
    #[error("corpus splitting produced no chunks")]
    NoChunks,
    #[error("failed to embed corpus chunks: {0}")]
    Embed(#[from] EmbedError),
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("failed to embed query: {0}")]
    Embed(#[from] EmbedError),
}
