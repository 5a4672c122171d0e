//! Query-time similarity retrieval.

use super::{
    build_corpus, split_corpus, IndexBuildError, InMemoryVectorIndex, RetrievalError, VectorIndex,
};
use crate::catalog::Catalog;
use crate::embedding::Embedder;
use std::sync::Arc;
use tracing::{debug, info};

/// Default size of the candidate pool returned by similarity search,
/// distinct from the final result cap applied by ranking.
pub const DEFAULT_INITIAL_K: usize = 10;

/// Chunks are embedded in batches of this many texts during index build.
const EMBED_BATCH_SIZE: usize = 32;

/// Retrieves catalog identifiers for a free-text query by nearest-neighbor
/// search over the embedded corpus. Owns the vector index; the embedder is
/// shared with whoever embeds queries on the way in.
pub struct SemanticRetriever {
    embedder: Arc<dyn Embedder>,
    index: Box<dyn VectorIndex>,
}

impl SemanticRetriever {
    /// Build the retriever from the catalog: materialize the corpus, chunk
    /// it, embed every chunk and index the vectors. Blocking by design;
    /// callers run this once at startup before serving.
    pub async fn build(
        catalog: &Catalog,
        embedder: Arc<dyn Embedder>,
    ) -> Result<SemanticRetriever, IndexBuildError> {
        let corpus = build_corpus(catalog);
        if corpus.is_empty() {
            return Err(IndexBuildError::EmptyCorpus);
        }

        let chunks = split_corpus(&corpus);
        if chunks.is_empty() {
            return Err(IndexBuildError::NoChunks);
        }
        info!(
            "Indexing {} corpus chunks from {} books...",
            chunks.len(),
            catalog.len()
        );

        let mut index = InMemoryVectorIndex::new();
        for batch in chunks.chunks(EMBED_BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|chunk| chunk.text.clone()).collect();
            let vectors = embedder.embed_batch(&texts).await?;
            for (chunk, vector) in batch.iter().zip(vectors) {
                index.insert(chunk.clone(), vector);
            }
        }
        info!("Vector index ready with {} entries", index.len());

        Ok(SemanticRetriever {
            embedder,
            index: Box::new(index),
        })
    }

    /// The `k` nearest catalog identifiers for the query, closest first.
    ///
    /// Chunks whose leading token does not parse as an identifier are
    /// dropped; duplicates are kept, downstream ranking joins them away.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<i64>, RetrievalError> {
        let query_vector = self.embedder.embed(query).await?;
        let neighbors = self.index.nearest(&query_vector, k);

        let mut identifiers = Vec::with_capacity(neighbors.len());
        for (chunk, distance) in neighbors {
            match chunk.leading_identifier() {
                Some(id) => {
                    debug!("candidate {} at distance {:.4}", id, distance);
                    identifiers.push(id);
                }
                None => {
                    debug!("dropping chunk without identifier (distance {:.4})", distance);
                }
            }
        }
        Ok(identifiers)
    }

    pub fn indexed_chunks(&self) -> usize {
        self.index.len()
    }
}
