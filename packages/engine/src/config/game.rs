//! Game configuration from defaults and `TIMELINE_*` environment variables.

use std::env;
use std::path::PathBuf;

use crate::domain::rules::RoundRules;
use crate::domain::state::GameMode;
use crate::errors::domain::DomainError;

/// Full engine configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub rules: RoundRules,
    /// JSON-lines card catalog consumed by the deck loader.
    pub deck_path: PathBuf,
    /// Local leaderboard file.
    pub leaderboard_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Timed,
            rules: RoundRules::default(),
            deck_path: PathBuf::from("data/cards.jsonl"),
            leaderboard_path: PathBuf::from("data/leaderboard.json"),
        }
    }
}

impl GameConfig {
    /// Build a configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        let rules = RoundRules {
            start_clock_secs: env_u16("TIMELINE_START_CLOCK_SECS", defaults.rules.start_clock_secs)?,
            correct_bonus_secs: env_u16("TIMELINE_CORRECT_BONUS_SECS", defaults.rules.correct_bonus_secs)?,
            incorrect_penalty_secs: env_u16(
                "TIMELINE_INCORRECT_PENALTY_SECS",
                defaults.rules.incorrect_penalty_secs,
            )?,
            start_lives: env_u16("TIMELINE_START_LIVES", defaults.rules.start_lives)?,
        };

        Ok(Self {
            mode: mode_from_env(defaults.mode)?,
            rules,
            deck_path: env_path("TIMELINE_DECK_PATH", defaults.deck_path),
            leaderboard_path: env_path("TIMELINE_LEADERBOARD_PATH", defaults.leaderboard_path),
        })
    }
}

fn mode_from_env(default: GameMode) -> Result<GameMode, DomainError> {
    match env::var("TIMELINE_MODE") {
        Err(_) => Ok(default),
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "timed" => Ok(GameMode::Timed),
            "lives" => Ok(GameMode::Lives),
            other => Err(DomainError::validation(format!(
                "TIMELINE_MODE must be 'timed' or 'lives', got '{other}'"
            ))),
        },
    }
}

fn env_u16(key: &str, default: u16) -> Result<u16, DomainError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| DomainError::validation(format!("{key} must be a small integer, got '{raw}'"))),
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or(default)
}
