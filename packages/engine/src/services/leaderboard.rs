//! Local leaderboard store: capped, score-sorted records per game mode.
//!
//! The engine calls `submit` exactly once when a round terminates and never
//! reads results back; `top_scores` exists for UIs.

use std::path::PathBuf;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::state::GameMode;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Retention per game mode.
const MAX_ENTRIES_PER_MODE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    pub score: u32,
    pub game_mode: GameMode,
    /// Unix seconds at submission time.
    pub timestamp: i64,
}

/// A `submit(mode, score)` capability invoked once per terminated round.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn submit(&self, mode: GameMode, score: u32) -> Result<(), DomainError>;
}

/// JSON-file-backed store with a generated persistent username.
pub struct JsonFileStore {
    path: PathBuf,
    username: String,
    // Serializes read-modify-write cycles on the backing file.
    lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            username: generate_username(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Best scores for a mode, highest first.
    pub async fn top_scores(&self, mode: GameMode, limit: usize) -> Vec<ScoreRecord> {
        let _guard = self.lock.lock().await;
        self.load()
            .into_iter()
            .filter(|r| r.game_mode == mode)
            .take(limit)
            .collect()
    }

    /// Missing or corrupt files read as empty rather than failing the game.
    fn load(&self) -> Vec<ScoreRecord> {
        match std::fs::read_to_string(&self.path) {
            Err(_) => Vec::new(),
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "corrupt leaderboard, starting fresh");
                Vec::new()
            }),
        }
    }

    fn save(&self, records: &[ScoreRecord]) -> Result<(), DomainError> {
        let body = serde_json::to_string_pretty(records).map_err(|e| {
            DomainError::infra(InfraErrorKind::Other("serialize".into()), e.to_string())
        })?;
        std::fs::write(&self.path, body).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Io,
                format!("cannot write leaderboard {}: {e}", self.path.display()),
            )
        })
    }
}

#[async_trait]
impl ScoreStore for JsonFileStore {
    async fn submit(&self, mode: GameMode, score: u32) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;

        let mut records = self.load();
        records.push(ScoreRecord {
            username: self.username.clone(),
            score,
            game_mode: mode,
            timestamp: time::OffsetDateTime::now_utc().unix_timestamp(),
        });

        // Descending by score, capped per mode.
        records.sort_by(|a, b| b.score.cmp(&a.score));
        let mut kept_per_mode = std::collections::HashMap::new();
        records.retain(|r| {
            let kept = kept_per_mode.entry(r.game_mode).or_insert(0usize);
            *kept += 1;
            *kept <= MAX_ENTRIES_PER_MODE
        });

        self.save(&records)?;
        debug!(?mode, score, "score recorded");
        Ok(())
    }
}

fn generate_username() -> String {
    const ADJECTIVES: &[&str] = &[
        "Swift", "Wise", "Brave", "Ancient", "Mystic", "Noble", "Clever", "Bold",
    ];
    const NOUNS: &[&str] = &[
        "Scholar", "Explorer", "Historian", "Sage", "Seeker", "Pioneer", "Curator", "Oracle",
    ];
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number: u16 = rng.random_range(0..10_000);
    format!("{adjective}{noun}_{number}")
}
