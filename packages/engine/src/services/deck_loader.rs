//! Deck loading and filtering from a JSON-lines card catalog.
//!
//! Filtering is this loader's responsibility, not the engine's: cards whose
//! label or description trivially reveal their year, whose description talks
//! in centuries, or whose id is denylisted never reach the deck.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::cards::Card;
use crate::domain::deck::Deck;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Card ids excluded from play: wrong artwork, disputed dating, or labels
/// that amount to spoilers.
const DENYLIST: &[&str] = &[
    "Q2277",    // year is part of the commonly used label
    "Q12548",   // dating disputed across sources
    "Q134949",  // artwork shows a dated plaque
];

static CENTURY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?i)(?:th|st|nd)[ -]century").unwrap()
});

/// Load, filter, and deduplicate a deck from a JSON-lines file.
pub fn load_deck(path: &Path) -> Result<Deck, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Io,
            format!("cannot read deck file {}: {e}", path.display()),
        )
    })?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut cards = Vec::new();
    let mut total = 0usize;

    for (line_no, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        total += 1;

        let card: Card = serde_json::from_str(line).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::MalformedRecord,
                format!("bad card record at {}:{}: {e}", path.display(), line_no + 1),
            )
        })?;

        if !playable(&card) || !seen.insert(card.id.clone()) {
            continue;
        }
        cards.push(card);
    }

    debug!(total, kept = cards.len(), path = %path.display(), "deck loaded");
    Ok(Deck::new(cards))
}

/// A card is playable when nothing about it gives the year away and it is
/// not denylisted.
fn playable(card: &Card) -> bool {
    let year = card.year.to_string();
    !card.label.contains(&year)
        && !card.description.contains(&year)
        && !CENTURY_RE.is_match(&card.description)
        && !DENYLIST.contains(&card.id.as_str())
}
