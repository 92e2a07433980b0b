//! Placement validation against the played sequence.
//!
//! Purely a function of the three adjacent years; O(1). It never re-sorts or
//! re-validates the rest of the sequence: once a card is recorded correct it
//! stays correct, even if later insertions change its de-facto position.

use crate::domain::cards::{Card, PlayedCard};

/// Result of validating a candidate insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub correct: bool,
    /// Minimum absolute year distance to the violated boundary; 0 when
    /// correct. Used downstream to size time penalties and feedback.
    pub magnitude: u32,
}

impl Placement {
    const CORRECT: Self = Self {
        correct: true,
        magnitude: 0,
    };
}

/// Decide whether inserting `candidate` at `insert_index` preserves
/// chronological order. Equal years on either side are accepted.
///
/// `insert_index` must already be clamped to `0..=played.len()`.
pub fn validate(played: &[PlayedCard], candidate: &Card, insert_index: usize) -> Placement {
    debug_assert!(insert_index <= played.len());

    let before = insert_index
        .checked_sub(1)
        .and_then(|i| played.get(i))
        .map(|p| p.card.year);
    let after = played.get(insert_index).map(|p| p.card.year);

    let before_ok = before.is_none_or(|y| y <= candidate.year);
    let after_ok = after.is_none_or(|y| candidate.year <= y);
    if before_ok && after_ok {
        return Placement::CORRECT;
    }

    let mut magnitude = u32::MAX;
    if let (false, Some(y)) = (before_ok, before) {
        magnitude = magnitude.min(distance(candidate.year, y));
    }
    if let (false, Some(y)) = (after_ok, after) {
        magnitude = magnitude.min(distance(candidate.year, y));
    }

    Placement {
        correct: false,
        magnitude,
    }
}

fn distance(a: i32, b: i32) -> u32 {
    (a as i64 - b as i64).unsigned_abs() as u32
}
