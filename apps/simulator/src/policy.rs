//! Placement policies for headless play.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use timeline_engine::{Card, PlayedCard};

/// Chooses a timeline index for the offered card.
pub trait PlacementPolicy {
    fn name(&self) -> &'static str;
    fn choose(&mut self, played: &[PlayedCard], next: &Card) -> usize;
}

/// Uniform random index. A lower bound for any real player.
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }
}

impl PlacementPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, played: &[PlayedCard], _next: &Card) -> usize {
        self.rng.random_range(0..=played.len())
    }
}

/// Always places correctly. An upper bound; useful for exercising deck
/// exhaustion and bonus accrual.
pub struct OraclePolicy;

impl PlacementPolicy for OraclePolicy {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn choose(&mut self, played: &[PlayedCard], next: &Card) -> usize {
        played.partition_point(|p| p.card.year <= next.year)
    }
}
