//! Headless timeline simulator.
//!
//! Runs batches of rounds in memory against the engine domain, with no
//! clock task, network, or persistence. Useful for sanity-checking rule
//! changes and policy quality.

mod policy;
mod simulator;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use timeline_engine::domain::derive_round_seed;
use timeline_engine::{load_deck, Card, Deck, GameMode, RoundRules};
use tracing::{info, warn};

use crate::policy::{OraclePolicy, PlacementPolicy, RandomPolicy};
use crate::simulator::run_round;

#[derive(Parser)]
#[command(name = "timeline-simulator")]
#[command(about = "Headless round simulator for the timeline engine")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "100")]
    rounds: u32,

    /// Game mode
    #[arg(long, default_value = "timed")]
    mode: ModeArg,

    /// Placement policy
    #[arg(long, default_value = "random")]
    policy: PolicyArg,

    /// Session seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-lines card catalog; a synthetic deck is generated when omitted
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Synthetic deck size
    #[arg(long, default_value = "60")]
    deck_size: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Timed,
    Lives,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Random,
    Oracle,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mode = match args.mode {
        ModeArg::Timed => GameMode::Timed,
        ModeArg::Lives => GameMode::Lives,
    };
    let rules = RoundRules::default();

    let session_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut session_rng = ChaCha8Rng::seed_from_u64(session_seed);

    let deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => synthetic_deck(args.deck_size, &mut session_rng),
    };
    info!(cards = deck.len(), session_seed, "deck ready");

    let mut policy: Box<dyn PlacementPolicy> = match args.policy {
        PolicyArg::Random => Box::new(RandomPolicy::new(ChaCha8Rng::seed_from_u64(
            session_rng.random(),
        ))),
        PolicyArg::Oracle => Box::new(OraclePolicy),
    };

    let mut scores = Vec::with_capacity(args.rounds as usize);
    let mut mistakes = 0u64;
    let mut reasons: BTreeMap<String, u32> = BTreeMap::new();

    for round_no in 1..=args.rounds {
        let round_seed = derive_round_seed(session_seed, round_no);
        match run_round(&deck, mode, rules, round_seed, policy.as_mut()) {
            Ok(result) => {
                scores.push(result.score);
                mistakes += u64::from(result.mistakes);
                *reasons.entry(format!("{:?}", result.reason)).or_insert(0) += 1;
                if args.verbose {
                    info!(
                        round_no,
                        score = result.score,
                        placements = result.placements,
                        reason = ?result.reason,
                        "round finished"
                    );
                }
            }
            Err(e) => warn!(round_no, error = %e, "round failed"),
        }
    }

    if scores.is_empty() {
        warn!("no rounds completed");
        return Ok(());
    }

    let best = scores.iter().copied().max().unwrap_or(0);
    let mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
    info!(
        policy = policy.name(),
        rounds = scores.len(),
        mean_score = format!("{mean:.2}"),
        best_score = best,
        total_mistakes = mistakes,
        "simulation complete"
    );
    for (reason, count) in &reasons {
        info!(reason, count, "termination reason");
    }

    Ok(())
}

/// Deterministic synthetic deck spanning antiquity to the present.
fn synthetic_deck(size: usize, rng: &mut ChaCha8Rng) -> Deck {
    let cards = (0..size)
        .map(|i| Card {
            id: format!("sim-{i:04}"),
            label: format!("Synthetic event {i}"),
            year: rng.random_range(-3000..=2025),
            description: String::new(),
            image: format!("https://img.invalid/sim-{i}.jpg"),
        })
        .collect();
    Deck::new(cards)
}
