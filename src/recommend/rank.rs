//! Candidate ranking: catalog join, category filter and tone sort.

use super::{Tone, ALL_CATEGORIES_LABEL};
use crate::catalog::{Book, Catalog};
use std::collections::HashSet;

/// Default cap on the number of returned records, applied after the join
/// and again after category filtering.
pub const DEFAULT_FINAL_K: usize = 16;

/// Rank retrieval candidates into the final ordered record list.
///
/// Steps, in order: inner join against the catalog preserving candidate
/// order (unknown identifiers dropped, repeats keep their first position),
/// truncate to `final_k`, category equality filter with a re-truncate,
/// then a stable descending sort by the tone's emotion score. Records
/// missing that score sort last; ties keep their prior relative order.
///
/// Category filtering runs after the first truncation on purpose: it can
/// shrink the result below `final_k` even when more matching records sit
/// further down the candidate pool. That mirrors the documented pipeline
/// contract, the cap bounds the join, not the filtered result.
pub fn rank<'a>(
    catalog: &'a Catalog,
    candidates: &[i64],
    category: &str,
    tone: Tone,
    final_k: usize,
) -> Vec<&'a Book> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut records: Vec<&Book> = candidates
        .iter()
        .filter(|id| seen.insert(**id))
        .filter_map(|id| catalog.get(*id))
        .collect();

    records.truncate(final_k);

    if category != ALL_CATEGORIES_LABEL {
        records.retain(|book| book.category.as_deref() == Some(category));
        records.truncate(final_k);
    }

    if let Some(selector) = tone.score_selector() {
        records.sort_by(|a, b| {
            let score_a = selector(&a.emotions).unwrap_or(f64::NEG_INFINITY);
            let score_b = selector(&b.emotions).unwrap_or(f64::NEG_INFINITY);
            score_b.total_cmp(&score_a)
        });
    }

    records
}
