//! Round state machine: placement handling, clock/lives bookkeeping, and
//! lookahead advancement.
//!
//! All operations here are pure with respect to I/O: image pre-fetch and
//! score submission are reported to the caller (via `PlacementResult::drawn`
//! and phase edges) rather than performed in-line.

use tracing::debug;

use crate::domain::cards::{Card, Outcome, PlayedCard};
use crate::domain::deck::{Deck, UsedMarks};
use crate::domain::lookahead::Lookahead;
use crate::domain::placement::validate;
use crate::domain::rules::RoundRules;
use crate::domain::sampler;
use crate::domain::seed_derivation::derive_draw_seed;
use crate::domain::state::{GameMode, Misplacement, Phase, RoundState, TerminalReason};
use crate::errors::domain::DomainError;

/// Where the player dropped the offered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSlot {
    /// Dropped back onto its own pending slot; a no-op by definition.
    Offer,
    /// Dropped into the played sequence at the given insertion index.
    Timeline(usize),
}

/// Reply to a placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementReply {
    /// Stale or malformed interaction; state untouched.
    Ignored,
    Placed(PlacementResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub outcome: Outcome,
    /// Year distance of the violation; 0 on a correct placement.
    pub magnitude: u32,
    /// Freshly drawn tail card whose artwork should now be pre-fetched.
    /// `None` when the deck ran dry and the round was forced to terminate.
    pub drawn: Option<Card>,
}

impl RoundState {
    /// Start a fresh round: seed the played sequence with one card marked
    /// correct, fill both lookahead slots, and reset clock/lives.
    ///
    /// Fails with `ExhaustedDeck` when the deck cannot cover the seed card
    /// plus both lookahead slots.
    pub fn start(
        deck: &Deck,
        mode: GameMode,
        rules: RoundRules,
        round_seed: u64,
    ) -> Result<Self, DomainError> {
        let mut used = UsedMarks::new(deck.len());
        let mut draws = 0;

        let seed_card = draw_card(deck, &mut used, round_seed, &mut draws)?;
        let next = draw_card(deck, &mut used, round_seed, &mut draws)?;
        let next_but_one = draw_card(deck, &mut used, round_seed, &mut draws)?;

        let clock_or_lives = match mode {
            GameMode::Timed => rules.start_clock_secs,
            GameMode::Lives => rules.start_lives,
        };

        debug!(seed_card = %seed_card.id, "round seeded");

        Ok(Self {
            phase: Phase::Playing,
            mode,
            rules,
            played: vec![PlayedCard::new(seed_card, true)],
            lookahead: Lookahead::new(next, next_but_one),
            clock_or_lives,
            last_misplacement: None,
            used,
            round_seed,
            draws,
        })
    }

    /// Handle a drop of the offered card.
    ///
    /// Outside `Playing` every attempt is a silent no-op: it signals a stale
    /// UI event, not an error. An out-of-range index is rejected the same
    /// way rather than surfaced to the caller.
    pub fn attempt_placement(&mut self, deck: &Deck, slot: DropSlot) -> PlacementReply {
        if self.phase != Phase::Playing {
            return PlacementReply::Ignored;
        }
        let insert_index = match slot {
            DropSlot::Offer => return PlacementReply::Ignored,
            DropSlot::Timeline(index) => index,
        };
        if insert_index > self.played.len() {
            return PlacementReply::Ignored;
        }
        let Some(candidate) = self.lookahead.next.clone() else {
            return PlacementReply::Ignored;
        };

        let placement = validate(&self.played, &candidate, insert_index);
        self.played.insert(
            insert_index,
            PlayedCard::new(candidate, placement.correct),
        );
        self.last_misplacement = if placement.correct {
            None
        } else {
            Some(Misplacement {
                index: insert_index,
                magnitude: placement.magnitude,
            })
        };

        match self.mode {
            GameMode::Timed => {
                if placement.correct {
                    self.clock_or_lives = self
                        .clock_or_lives
                        .saturating_add(self.rules.correct_bonus_secs);
                } else {
                    self.clock_or_lives = self
                        .clock_or_lives
                        .saturating_sub(self.rules.incorrect_penalty_secs);
                }
            }
            GameMode::Lives => {
                if !placement.correct {
                    self.clock_or_lives = self.clock_or_lives.saturating_sub(1);
                }
            }
        }

        // Advance the lookahead; running the deck dry here is fatal to the
        // round and must not leave an empty offer slot while still Playing.
        let drawn = match draw_card(deck, &mut self.used, self.round_seed, &mut self.draws) {
            Ok(card) => {
                self.lookahead.advance(Some(card.clone()));
                Some(card)
            }
            Err(_) => {
                self.lookahead.advance(None);
                self.phase = Phase::Terminated {
                    reason: TerminalReason::DeckExhausted,
                };
                None
            }
        };

        if self.phase == Phase::Playing && self.clock_or_lives == 0 {
            self.phase = Phase::Terminated {
                reason: match self.mode {
                    GameMode::Timed => TerminalReason::TimeUp,
                    GameMode::Lives => TerminalReason::LivesOut,
                },
            };
        }

        PlacementReply::Placed(PlacementResult {
            outcome: Outcome {
                correct: placement.correct,
            },
            magnitude: placement.magnitude,
            drawn,
        })
    }

    /// One second of elapsed time in timed mode. No-op in any other phase
    /// or mode, so a queued tick can never mutate a terminated round.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing || self.mode != GameMode::Timed {
            return;
        }
        self.clock_or_lives = self.clock_or_lives.saturating_sub(1);
        if self.clock_or_lives == 0 {
            self.phase = Phase::Terminated {
                reason: TerminalReason::TimeUp,
            };
        }
    }
}

fn draw_card(
    deck: &Deck,
    used: &mut UsedMarks,
    round_seed: u64,
    draws: &mut u32,
) -> Result<Card, DomainError> {
    let seed = derive_draw_seed(round_seed, *draws);
    *draws += 1;
    let index = sampler::draw(deck, used, seed)?;
    used.mark(index);
    deck.get(index).cloned().ok_or(DomainError::ExhaustedDeck)
}
