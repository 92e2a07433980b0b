use crate::domain::state::{Phase, RoundState, TerminalReason};

/// Minimal view of round lifecycle for before/after comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLifecycleView {
    pub phase: Phase,
    pub cards_played: usize,
}

impl RoundLifecycleView {
    pub fn of(state: &RoundState) -> Self {
        Self {
            phase: state.phase,
            cards_played: state.played.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTransition {
    /// Edge-triggered: the round entered `Playing`.
    RoundStarted,

    /// Edge-triggered: a card landed in the played sequence.
    CardPlaced,

    /// Edge-triggered: the round left `Playing` for good. The one point
    /// where the final score is submitted to the leaderboard.
    RoundEnded { reason: TerminalReason },
}

/// Derive round transitions from before/after lifecycle state.
pub fn derive_round_transitions(
    before: &RoundLifecycleView,
    after: &RoundLifecycleView,
) -> Vec<RoundTransition> {
    let mut transitions = Vec::new();

    if before.phase != Phase::Playing && after.phase == Phase::Playing {
        transitions.push(RoundTransition::RoundStarted);
    }

    if after.cards_played > before.cards_played {
        transitions.push(RoundTransition::CardPlaced);
    }

    if !before.phase.is_terminated() {
        if let Phase::Terminated { reason } = after.phase {
            transitions.push(RoundTransition::RoundEnded { reason });
        }
    }

    transitions
}
