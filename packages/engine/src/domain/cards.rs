use serde::{Deserialize, Serialize};

/// A single playable event card. Immutable once loaded from the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the catalog.
    pub id: String,
    pub label: String,
    /// Signed year; negative values are BCE.
    pub year: i32,
    #[serde(default)]
    pub description: String,
    /// Artwork URI, pre-fetched by the lookahead pipeline before display.
    pub image: String,
}

/// Outcome tag recorded at the moment a card was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub correct: bool,
}

impl Outcome {
    pub const CORRECT: Self = Self { correct: true };
    pub const INCORRECT: Self = Self { correct: false };
}

/// A card plus the outcome it was tagged with when placed.
///
/// Immutable after creation: the round replaces the played sequence rather
/// than rewriting entries, so an outcome is never re-evaluated even when
/// later insertions change its de-facto correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: Card,
    pub outcome: Outcome,
}

impl PlayedCard {
    pub fn new(card: Card, correct: bool) -> Self {
        Self {
            card,
            outcome: Outcome { correct },
        }
    }
}
