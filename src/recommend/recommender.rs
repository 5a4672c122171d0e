//! The recommender facade tying catalog, retrieval and ranking together.

use super::{rank, DisplayItem, Tone};
use crate::catalog::Catalog;
use crate::search::{RetrievalError, SemanticRetriever};
use tracing::debug;

/// Immutable recommendation context, constructed once at startup and
/// shared read-only across requests. No locking: every field is read-only
/// after construction.
pub struct Recommender {
    catalog: Catalog,
    retriever: SemanticRetriever,
    initial_k: usize,
    final_k: usize,
}

impl Recommender {
    pub fn new(
        catalog: Catalog,
        retriever: SemanticRetriever,
        initial_k: usize,
        final_k: usize,
    ) -> Recommender {
        Recommender {
            catalog,
            retriever,
            initial_k,
            final_k,
        }
    }

    /// Recommend books for a free-text query, with optional category
    /// filter and tone re-sort. An empty result is a normal outcome.
    pub async fn recommend(
        &self,
        query: &str,
        category: &str,
        tone: Tone,
    ) -> Result<Vec<DisplayItem>, RetrievalError> {
        let candidates = self.retriever.retrieve(query, self.initial_k).await?;
        debug!(
            "query {:?} retrieved {} candidates",
            query,
            candidates.len()
        );

        let records = rank(&self.catalog, &candidates, category, tone, self.final_k);
        Ok(records.iter().map(|book| DisplayItem::for_book(book)).collect())
    }

    /// Category labels for the selection dropdown: `"All"` first, then the
    /// catalog's sorted unique labels.
    pub fn category_labels(&self) -> Vec<String> {
        let mut labels = vec![super::ALL_CATEGORIES_LABEL.to_string()];
        labels.extend(self.catalog.categories());
        labels
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn indexed_chunks(&self) -> usize {
        self.retriever.indexed_chunks()
    }
}
