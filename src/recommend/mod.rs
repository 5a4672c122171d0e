//! Recommendation pipeline: candidate ranking, tone re-sorting and
//! display formatting on top of the retrieval layer.

mod caption;
mod rank;
mod recommender;
mod tone;

pub use caption::{caption, format_authors, DisplayItem};
pub use rank::{rank, DEFAULT_FINAL_K};
pub use recommender::Recommender;
pub use tone::{Tone, ALL_CATEGORIES_LABEL};
