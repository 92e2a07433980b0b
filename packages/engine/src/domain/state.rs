use serde::{Deserialize, Serialize};

use crate::domain::cards::PlayedCard;
use crate::domain::deck::UsedMarks;
use crate::domain::lookahead::Lookahead;
use crate::domain::rules::{self, RoundRules};

/// Which termination rule the round runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Countdown clock with bonus/penalty adjustments per placement.
    Timed,
    /// Fixed life count; each misplacement costs one life.
    Lives,
}

/// Why a round left `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalReason {
    TimeUp,
    LivesOut,
    /// The sampler could not satisfy the exclusion constraint. Reported as a
    /// distinguishable failure, not a normal game-over.
    DeckExhausted,
}

/// Round progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No deck seeded yet / waiting to start.
    Idle,
    /// Accepting placements; clock or lives active.
    Playing,
    /// Round ended; score is final.
    Terminated { reason: TerminalReason },
}

impl Phase {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Phase::Terminated { .. })
    }
}

/// Record of the most recent misplacement, for feedback sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misplacement {
    /// Index the card landed at in the played sequence.
    pub index: usize,
    /// Year distance by which chronological order was violated.
    pub magnitude: u32,
}

/// Entire per-round container, sufficient for pure domain operations.
///
/// Owned exclusively by the round orchestration; a new round constructs a
/// fresh value rather than reusing fields of a terminated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub phase: Phase,
    pub mode: GameMode,
    pub rules: RoundRules,
    /// Player-constructed sequence; always holds at least the seed card once
    /// playing. Locally correct at insertion time only, never re-validated.
    pub played: Vec<PlayedCard>,
    pub lookahead: Lookahead,
    /// Remaining seconds in timed mode, remaining lives in lives mode.
    pub clock_or_lives: u16,
    pub last_misplacement: Option<Misplacement>,
    /// Exclusion marks over the deck arena (played + queued).
    pub used: UsedMarks,
    /// Seed this round's draws derive from.
    pub round_seed: u64,
    /// Number of draws performed so far.
    pub draws: u32,
}

impl RoundState {
    /// Waiting-to-start state: nothing played, nothing queued.
    pub fn idle(mode: GameMode, rules: RoundRules) -> Self {
        Self {
            phase: Phase::Idle,
            mode,
            rules,
            played: Vec::new(),
            lookahead: Lookahead::empty(),
            clock_or_lives: 0,
            last_misplacement: None,
            used: UsedMarks::new(0),
            round_seed: 0,
            draws: 0,
        }
    }

    /// Count of correctly played cards minus the auto-seeded one.
    pub fn score(&self) -> u32 {
        rules::score(&self.played)
    }
}
