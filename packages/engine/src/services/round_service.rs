//! Serialized round orchestration.
//!
//! One `RoundService` owns one round's state behind a mutex: placements,
//! clock ticks, and lookahead advances all serialize on it. Image pre-fetch
//! and score submission are the only concurrent operations, and both are
//! fire-and-forget with no observable effect on game state.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::domain::cards::Outcome;
use crate::domain::deck::Deck;
use crate::domain::round::{DropSlot, PlacementReply};
use crate::domain::rules::RoundRules;
use crate::domain::snapshot::{snapshot, RoundSnapshot};
use crate::domain::state::{GameMode, RoundState};
use crate::domain::transition::{derive_round_transitions, RoundLifecycleView, RoundTransition};
use crate::errors::domain::DomainError;
use crate::services::image_cache::ImagePreloader;
use crate::services::leaderboard::ScoreStore;

/// What the UI gets back from a placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementFeedback {
    /// `None` when the attempt was a stale or malformed no-op.
    pub outcome: Option<Outcome>,
    pub magnitude: u32,
    pub state: RoundSnapshot,
}

pub struct RoundService {
    deck: Arc<Deck>,
    mode: GameMode,
    rules: RoundRules,
    state: Arc<Mutex<RoundState>>,
    preloader: Arc<dyn ImagePreloader>,
    store: Arc<dyn ScoreStore>,
    clock: Mutex<Option<CancellationToken>>,
}

impl RoundService {
    pub fn new(
        deck: Arc<Deck>,
        mode: GameMode,
        rules: RoundRules,
        preloader: Arc<dyn ImagePreloader>,
        store: Arc<dyn ScoreStore>,
    ) -> Self {
        Self {
            deck,
            mode,
            rules,
            state: Arc::new(Mutex::new(RoundState::idle(mode, rules))),
            preloader,
            store,
            clock: Mutex::new(None),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Start a fresh round, replacing whatever state the previous one left.
    ///
    /// Constructs a brand-new `RoundState` (never reuses a terminated one)
    /// and issues pre-fetch for both lookahead images.
    pub fn start(&self) -> Result<RoundSnapshot, DomainError> {
        self.stop_clock();

        let round_seed: u64 = rand::rng().random();
        let fresh = RoundState::start(&self.deck, self.mode, self.rules, round_seed)?;

        let mut prefetch = Vec::with_capacity(2);
        if let Some(card) = &fresh.lookahead.next {
            prefetch.push(card.image.clone());
        }
        if let Some(card) = &fresh.lookahead.next_but_one {
            prefetch.push(card.image.clone());
        }

        let snap = {
            let mut state = self.state.lock();
            *state = fresh;
            snapshot(&state)
        };

        for uri in prefetch {
            self.spawn_preload(uri);
        }
        if self.mode == GameMode::Timed {
            self.start_clock();
        }

        info!(mode = ?self.mode, "round started");
        Ok(snap)
    }

    /// Handle a drop of the offered card. Safe to call in any phase; stale
    /// events degrade to a feedback with no outcome.
    pub fn attempt_placement(&self, slot: DropSlot) -> PlacementFeedback {
        let (reply, transitions, score, snap) = {
            let mut state = self.state.lock();
            let before = RoundLifecycleView::of(&state);
            let reply = state.attempt_placement(&self.deck, slot);
            let after = RoundLifecycleView::of(&state);
            (
                reply,
                derive_round_transitions(&before, &after),
                state.score(),
                snapshot(&state),
            )
        };

        if let PlacementReply::Placed(result) = &reply {
            if let Some(card) = &result.drawn {
                self.spawn_preload(card.image.clone());
            }
        }

        for transition in &transitions {
            if let RoundTransition::RoundEnded { reason } = transition {
                info!(score, reason = ?reason, "round terminated");
                self.stop_clock();
                self.spawn_submit(score);
            }
        }

        match reply {
            PlacementReply::Ignored => PlacementFeedback {
                outcome: None,
                magnitude: 0,
                state: snap,
            },
            PlacementReply::Placed(result) => PlacementFeedback {
                outcome: Some(result.outcome),
                magnitude: result.magnitude,
                state: snap,
            },
        }
    }

    /// Read-only view of the current round.
    pub fn snapshot(&self) -> RoundSnapshot {
        snapshot(&self.state.lock())
    }

    /// Deliberate reset back to idle; stops the clock first so no tick can
    /// touch the new state.
    pub fn reset(&self) {
        self.stop_clock();
        *self.state.lock() = RoundState::idle(self.mode, self.rules);
    }

    /// Repeating 1 s countdown, cancelled the moment the round leaves
    /// `Playing`. No drift correction is required.
    fn start_clock(&self) {
        let token = CancellationToken::new();
        *self.clock.lock() = Some(token.clone());

        let state = Arc::clone(&self.state);
        let store = Arc::clone(&self.store);
        let mode = self.mode;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; skip it.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let (transitions, score) = {
                            let mut state = state.lock();
                            let before = RoundLifecycleView::of(&state);
                            state.tick();
                            let after = RoundLifecycleView::of(&state);
                            (derive_round_transitions(&before, &after), state.score())
                        };
                        let mut ended = false;
                        for transition in transitions {
                            if let RoundTransition::RoundEnded { reason } = transition {
                                info!(score, reason = ?reason, "round terminated by clock");
                                if let Err(e) = store.submit(mode, score).await {
                                    warn!(error = %e, "score submit failed");
                                }
                                ended = true;
                            }
                        }
                        if ended {
                            token.cancel();
                            break;
                        }
                    }
                }
            }
        });
    }

    fn stop_clock(&self) {
        if let Some(token) = self.clock.lock().take() {
            token.cancel();
        }
    }

    fn spawn_preload(&self, uri: String) {
        let preloader = Arc::clone(&self.preloader);
        tokio::spawn(async move {
            preloader.preload(&uri).await;
        });
    }

    fn spawn_submit(&self, score: u32) {
        let store = Arc::clone(&self.store);
        let mode = self.mode;
        tokio::spawn(async move {
            if let Err(e) = store.submit(mode, score).await {
                warn!(error = %e, "score submit failed");
            }
        });
    }
}

impl Drop for RoundService {
    fn drop(&mut self) {
        self.stop_clock();
    }
}
