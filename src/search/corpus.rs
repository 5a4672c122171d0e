//! Corpus construction and deterministic chunking.
//!
//! The corpus is one line per book, `"<identifier> <description>"`, joined
//! with newlines. Chunks are slices of that corpus bounded by a maximum
//! size, with bounded overlap between consecutive chunks so a record whose
//! text continues across a boundary is not cut off from its leading
//! identifier token in every chunk that contains it.

use crate::catalog::Catalog;
use std::collections::VecDeque;

pub const CHUNK_SIZE: usize = 4000;
pub const CHUNK_OVERLAP: usize = 200;
const SEPARATOR: char = '\n';

/// A contiguous slice of the corpus, the unit indexed for similarity
/// search. Created once at index-build time, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusChunk {
    pub text: String,
}

impl CorpusChunk {
    /// The identifier token of the record this chunk starts with, if the
    /// chunk begins at a record boundary. Double quotes are stripped, the
    /// source data quotes identifiers in some exports.
    pub fn leading_identifier(&self) -> Option<i64> {
        let token = self.text.split_whitespace().next()?;
        token.replace('"', "").parse().ok()
    }
}

/// Materialize the corpus text from the catalog: one line per record.
pub fn build_corpus(catalog: &Catalog) -> String {
    let lines: Vec<String> = catalog
        .iter()
        .map(|book| format!("{} {}", book.id, book.description))
        .collect();
    lines.join("\n")
}

/// Split the corpus on newlines and merge the pieces into chunks of at
/// most [`CHUNK_SIZE`] characters, carrying at most [`CHUNK_OVERLAP`]
/// characters of trailing pieces into the next chunk. A single over-long
/// line becomes its own chunk.
pub fn split_corpus(corpus: &str) -> Vec<CorpusChunk> {
    split_with_limits(corpus, CHUNK_SIZE, CHUNK_OVERLAP)
}

fn joined_len(pieces: &VecDeque<&str>) -> usize {
    let chars: usize = pieces.iter().map(|piece| piece.len()).sum();
    chars + pieces.len().saturating_sub(1) * SEPARATOR.len_utf8()
}

fn split_with_limits(corpus: &str, chunk_size: usize, overlap: usize) -> Vec<CorpusChunk> {
    if corpus.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<CorpusChunk> = Vec::new();
    let mut current: VecDeque<&str> = VecDeque::new();

    for piece in corpus.split(SEPARATOR) {
        if !current.is_empty() && joined_len(&current) + SEPARATOR.len_utf8() + piece.len() > chunk_size
        {
            let text: Vec<&str> = current.iter().copied().collect();
            chunks.push(CorpusChunk {
                text: text.join("\n"),
            });

            // Keep trailing pieces as overlap, dropping from the front until
            // the carried text fits both the overlap bound and the next chunk
            while joined_len(&current) > overlap
                || (!current.is_empty()
                    && joined_len(&current) + SEPARATOR.len_utf8() + piece.len() > chunk_size)
            {
                current.pop_front();
            }
        }
        current.push_back(piece);
    }

    if !current.is_empty() {
        let text: Vec<&str> = current.iter().copied().collect();
        let text = text.join("\n");
        if !text.is_empty() {
            chunks.push(CorpusChunk { text });
        }
    }

    chunks
}
