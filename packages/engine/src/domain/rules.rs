use crate::domain::cards::PlayedCard;

pub const START_CLOCK_SECS: u16 = 60;
pub const CORRECT_BONUS_SECS: u16 = 2;
pub const INCORRECT_PENALTY_SECS: u16 = 5;
pub const START_LIVES: u16 = 3;

/// Seed card + both lookahead slots.
pub const MIN_DECK_SIZE: usize = 3;

/// Tunable per-round rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub start_clock_secs: u16,
    pub correct_bonus_secs: u16,
    pub incorrect_penalty_secs: u16,
    pub start_lives: u16,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            start_clock_secs: START_CLOCK_SECS,
            correct_bonus_secs: CORRECT_BONUS_SECS,
            incorrect_penalty_secs: INCORRECT_PENALTY_SECS,
            start_lives: START_LIVES,
        }
    }
}

/// Score is always derived, never stored: correctly played cards minus the
/// auto-seeded one.
pub fn score(played: &[PlayedCard]) -> u32 {
    let correct = played.iter().filter(|p| p.outcome.correct).count() as u32;
    correct.saturating_sub(1)
}
