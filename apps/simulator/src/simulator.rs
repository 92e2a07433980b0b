//! Headless round execution against the engine's domain layer.
//!
//! Runs rounds synchronously with no clock task: in timed mode one tick is
//! applied per placement, a crude stand-in for a player who takes about a
//! second per move.

use timeline_engine::domain::round::{DropSlot, PlacementReply};
use timeline_engine::{Deck, DomainError, GameMode, RoundRules, RoundState, TerminalReason};

use crate::policy::PlacementPolicy;

#[derive(Debug, Clone, Copy)]
pub struct RoundResult {
    pub score: u32,
    pub placements: u32,
    pub mistakes: u32,
    pub reason: TerminalReason,
}

pub fn run_round(
    deck: &Deck,
    mode: GameMode,
    rules: RoundRules,
    round_seed: u64,
    policy: &mut dyn PlacementPolicy,
) -> Result<RoundResult, DomainError> {
    let mut state = RoundState::start(deck, mode, rules, round_seed)?;
    let mut placements = 0u32;
    let mut mistakes = 0u32;

    while !state.phase.is_terminated() {
        let Some(next) = state.lookahead.next.clone() else {
            break;
        };
        let index = policy.choose(&state.played, &next);

        match state.attempt_placement(deck, DropSlot::Timeline(index)) {
            PlacementReply::Ignored => break,
            PlacementReply::Placed(result) => {
                placements += 1;
                if !result.outcome.correct {
                    mistakes += 1;
                }
            }
        }
        if mode == GameMode::Timed {
            state.tick();
        }
    }

    let reason = match state.phase {
        timeline_engine::Phase::Terminated { reason } => reason,
        // A policy can only leave Playing through termination.
        _ => TerminalReason::DeckExhausted,
    };

    Ok(RoundResult {
        score: state.score(),
        placements,
        mistakes,
        reason,
    })
}
