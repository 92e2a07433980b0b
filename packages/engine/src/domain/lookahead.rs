//! Two-deep lookahead buffer feeding the card offer.
//!
//! `next` is the card currently offered to the player; `next_but_one` is
//! pre-selected so its artwork pre-fetch gets a head start. Collapsing this
//! to a single slot would reintroduce visible image latency on every play.

use crate::domain::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead {
    pub next: Option<Card>,
    pub next_but_one: Option<Card>,
}

impl Lookahead {
    pub const fn empty() -> Self {
        Self {
            next: None,
            next_but_one: None,
        }
    }

    pub fn new(next: Card, next_but_one: Card) -> Self {
        Self {
            next: Some(next),
            next_but_one: Some(next_but_one),
        }
    }

    /// Promote `next_but_one` into the offer slot and install a fresh tail.
    /// The promoted card is never re-drawn, so its image was already
    /// requested in the prior cycle.
    pub fn advance(&mut self, fresh: Option<Card>) {
        self.next = self.next_but_one.take();
        self.next_but_one = fresh;
    }
}
