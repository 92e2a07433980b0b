#![deny(clippy::wildcard_imports)]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;


pub use config::game::GameConfig;
pub use domain::cards::{Card, Outcome, PlayedCard};
pub use domain::deck::Deck;
pub use domain::round::{DropSlot, PlacementReply, PlacementResult};
pub use domain::rules::RoundRules;
pub use domain::snapshot::{snapshot, PhaseSnapshot, RoundSnapshot};
pub use domain::state::{GameMode, Phase, RoundState, TerminalReason};
pub use errors::domain::DomainError;
pub use services::deck_loader::load_deck;
pub use services::image_cache::{HttpImageCache, ImagePreloader, NoopPreloader};
pub use services::leaderboard::{JsonFileStore, ScoreRecord, ScoreStore};
pub use services::round_service::{PlacementFeedback, RoundService};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
