//! Immutable card pool for a session, with index-based used-marking.
//!
//! The deck is loaded once and shared read-only. Per-round exclusion is a
//! parallel used-mark arena instead of repeated set-difference over growing
//! lists, so sampling stays cheap as the round progresses.

use crate::domain::cards::Card;

/// The full pool of candidate cards for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from an already deduplicated, pre-filtered catalog.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Per-round "already used" marks over a deck arena.
///
/// A card is marked the moment it is drawn (played or queued), which makes
/// the exclusion set exactly "played + lookahead" without bookkeeping at
/// placement time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedMarks {
    used: Vec<bool>,
    count: usize,
}

impl UsedMarks {
    pub fn new(deck_len: usize) -> Self {
        Self {
            used: vec![false; deck_len],
            count: 0,
        }
    }

    pub fn mark(&mut self, index: usize) {
        if let Some(slot) = self.used.get_mut(index) {
            if !*slot {
                *slot = true;
                self.count += 1;
            }
        }
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    /// Number of deck cards not yet drawn this round.
    pub fn remaining(&self) -> usize {
        self.used.len() - self.count
    }
}
