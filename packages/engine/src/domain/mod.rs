//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod deck;
pub mod lookahead;
pub mod placement;
pub mod round;
pub mod rules;
pub mod sampler;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod transition;

#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards::{Card, Outcome, PlayedCard};
pub use deck::{Deck, UsedMarks};
pub use lookahead::Lookahead;
pub use placement::{validate, Placement};
pub use round::{DropSlot, PlacementReply, PlacementResult};
pub use rules::RoundRules;
pub use seed_derivation::{derive_draw_seed, derive_round_seed};
pub use snapshot::{snapshot, PhaseSnapshot, RoundSnapshot};
pub use state::{GameMode, Misplacement, Phase, RoundState, TerminalReason};
pub use transition::{derive_round_transitions, RoundLifecycleView, RoundTransition};
