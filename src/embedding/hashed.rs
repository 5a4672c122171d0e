//! Deterministic local embedding via word feature hashing.

use super::{EmbedError, Embedder};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_DIMENSIONS: usize = 384;

/// Feature-hashed bag-of-words embedder.
///
/// Each lowercased unicode word is hashed into a bucket with a sign bit and
/// the resulting vector is L2-normalized, so cosine distances behave like a
/// crude lexical similarity. No model, no network, fully deterministic:
/// this is the offline and test provider, not a semantic model.
pub struct HashedEmbedder {
    dimensions: usize,
}

impl HashedEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

fn hash_word(word: &str) -> (usize, f32) {
    let digest = Sha256::digest(word.as_bytes());
    let mut bucket_bytes = [0u8; 8];
    bucket_bytes.copy_from_slice(&digest[..8]);
    let bucket = u64::from_be_bytes(bucket_bytes);
    // Ninth byte's low bit decides the sign, independent of the bucket
    let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
    (bucket as usize, sign)
}

fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

#[async_trait]
impl Embedder for HashedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut vector = vec![0.0f32; self.dimensions];
        for word in text.to_lowercase().unicode_words() {
            let (bucket, sign) = hash_word(word);
            vector[bucket % self.dimensions] += sign;
        }
        l2_normalize(&mut vector);
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "hashed"
    }
}
