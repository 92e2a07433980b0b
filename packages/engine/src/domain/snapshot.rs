//! Public snapshot API for observing round state without exposing internals.
//!
//! Snapshots are the pull-based surface the UI renders from; no implicit
//! reactivity is part of the engine's contract. `next_but_one` is
//! deliberately absent: it exists only so its artwork warms up early.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, PlayedCard};
use crate::domain::state::{GameMode, Misplacement, Phase, RoundState, TerminalReason};

/// Round-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHeader {
    pub mode: GameMode,
    pub score: u32,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: RoundHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Idle,
    Playing(PlayingSnapshot),
    Terminated(TerminatedSnapshot),
}

/// Live round view: everything the board needs to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub played: Vec<PlayedCard>,
    /// Card currently offered to the player.
    pub next: Option<Card>,
    /// Remaining seconds (timed) or lives (lives mode).
    pub clock_or_lives: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_misplacement: Option<Misplacement>,
}

/// Final round view once the score is settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminatedSnapshot {
    pub reason: TerminalReason,
    pub played: Vec<PlayedCard>,
    pub final_score: u32,
}

/// Entry point: produce a snapshot of the current round state.
/// Never panics; safe on any reachable state.
pub fn snapshot(state: &RoundState) -> RoundSnapshot {
    let round = RoundHeader {
        mode: state.mode,
        score: state.score(),
    };

    let phase = match state.phase {
        Phase::Idle => PhaseSnapshot::Idle,
        Phase::Playing => PhaseSnapshot::Playing(PlayingSnapshot {
            played: state.played.clone(),
            next: state.lookahead.next.clone(),
            clock_or_lives: state.clock_or_lives,
            last_misplacement: state.last_misplacement,
        }),
        Phase::Terminated { reason } => PhaseSnapshot::Terminated(TerminatedSnapshot {
            reason,
            played: state.played.clone(),
            final_score: state.score(),
        }),
    };

    RoundSnapshot { round, phase }
}
