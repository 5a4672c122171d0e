use crate::catalog::EmotionScores;
use serde::{Deserialize, Serialize};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Emotional tone used to re-rank results by a precomputed per-record
/// score. `All` leaves retrieval order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    All,
    Happy,
    Surprising,
    Angry,
    Suspenseful,
    Sad,
}

type ScoreSelector = fn(&EmotionScores) -> Option<f64>;

/// Tone to emotion-field mapping. Table-driven so adding a tone is one
/// row, not another branch.
const TONE_SELECTORS: [(Tone, ScoreSelector); 5] = [
    (Tone::Happy, |emotions| emotions.joy),
    (Tone::Surprising, |emotions| emotions.surprise),
    (Tone::Angry, |emotions| emotions.anger),
    (Tone::Suspenseful, |emotions| emotions.fear),
    (Tone::Sad, |emotions| emotions.sadness),
];

impl Tone {
    /// The emotion-field selector for this tone, `None` for [`Tone::All`].
    pub fn score_selector(self) -> Option<ScoreSelector> {
        TONE_SELECTORS
            .iter()
            .find(|(tone, _)| *tone == self)
            .map(|(_, selector)| *selector)
    }

    /// All selectable tone labels, `"All"` first, in dropdown order.
    pub fn labels() -> Vec<&'static str> {
        vec!["All", "Happy", "Surprising", "Angry", "Suspenseful", "Sad"]
    }
}
