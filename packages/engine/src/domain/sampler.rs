//! Uniform no-repeat sampling from the deck arena.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::deck::{Deck, UsedMarks};
use crate::errors::domain::DomainError;

/// Draw the index of a card chosen uniformly at random among unused ones.
///
/// The caller is responsible for marking the returned index as used.
/// Fails with `ExhaustedDeck` when every card is already played or queued;
/// callers must not assume this is unreachable on a pathological short deck.
pub fn draw(deck: &Deck, used: &UsedMarks, seed: u64) -> Result<usize, DomainError> {
    let remaining = used.remaining();
    if remaining == 0 || deck.is_empty() {
        return Err(DomainError::ExhaustedDeck);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let target = rng.random_range(0..remaining);

    let mut seen = 0;
    for index in 0..deck.len() {
        if used.is_used(index) {
            continue;
        }
        if seen == target {
            return Ok(index);
        }
        seen += 1;
    }

    // remaining > 0 guarantees the scan finds a card.
    Err(DomainError::ExhaustedDeck)
}
