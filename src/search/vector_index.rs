//! Vector index over corpus chunks.

use super::CorpusChunk;
use rayon::prelude::*;

/// Nearest-neighbor index over embedded corpus chunks. Built once at
/// startup, read-only afterwards.
pub trait VectorIndex: Send + Sync {
    /// Insert a chunk with its embedding vector.
    fn insert(&mut self, chunk: CorpusChunk, vector: Vec<f32>);

    /// The `k` chunks closest to the query vector, ascending by distance.
    fn nearest(&self, query: &[f32], k: usize) -> Vec<(&CorpusChunk, f32)>;

    /// Number of indexed chunks.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brute-force in-memory index using cosine distance.
///
/// The catalog fits in memory and is scanned in parallel, so exhaustive
/// search stays well under request budgets at this scale.
#[derive(Default)]
pub struct InMemoryVectorIndex {
    entries: Vec<(CorpusChunk, Vec<f32>)>,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cosine distance in [0, 2]; mismatched or zero-norm vectors are treated
/// as maximally distant.
fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 2.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 2.0;
    }
    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
}

impl VectorIndex for InMemoryVectorIndex {
    fn insert(&mut self, chunk: CorpusChunk, vector: Vec<f32>) {
        self.entries.push((chunk, vector));
    }

    fn nearest(&self, query: &[f32], k: usize) -> Vec<(&CorpusChunk, f32)> {
        let mut scored: Vec<(usize, f32)> = self
            .entries
            .par_iter()
            .enumerate()
            .map(|(position, (_, vector))| (position, cosine_distance(query, vector)))
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(position, distance)| (&self.entries[position].0, distance))
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
