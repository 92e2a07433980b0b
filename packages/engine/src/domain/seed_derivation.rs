//! RNG seed derivation utilities for deterministic sampling.
//!
//! Every draw in a round is keyed by (round seed, draw number), so a round
//! replays identically from the same seed while consecutive draws stay
//! decorrelated.

/// Derive a seed for a single round from a session-level base seed.
///
/// Same session + round number = same round; different rounds diverge.
pub fn derive_round_seed(session_seed: u64, round_no: u32) -> u64 {
    session_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(1)
}

/// Derive a seed for the nth draw within a round.
///
/// Different multiplier from the round derivation to keep the contexts
/// separated.
pub fn derive_draw_seed(round_seed: u64, draw_no: u32) -> u64 {
    round_seed
        .wrapping_add((draw_no as u64).wrapping_mul(10_000))
        .wrapping_add(2)
}
