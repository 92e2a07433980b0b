use crate::domain::cards::{Card, PlayedCard};
use crate::domain::deck::{Deck, UsedMarks};
use crate::domain::lookahead::Lookahead;
use crate::domain::round::{DropSlot, PlacementReply};
use crate::domain::rules::RoundRules;
use crate::domain::state::{GameMode, Phase, RoundState, TerminalReason};
use crate::errors::domain::DomainError;

fn card(id: &str, year: i32) -> Card {
    Card {
        id: id.to_string(),
        label: id.to_string(),
        year,
        description: String::new(),
        image: format!("https://img.test/{id}.jpg"),
    }
}

/// Build a `Playing` state with a known seed card and lookahead, bypassing
/// the random draws. Indexes 0..=2 of the deck are seed, next, next-but-one.
fn playing_state(deck: &Deck, mode: GameMode, rules: RoundRules) -> RoundState {
    let mut used = UsedMarks::new(deck.len());
    for index in 0..=2 {
        used.mark(index);
    }
    RoundState {
        phase: Phase::Playing,
        mode,
        rules,
        played: vec![PlayedCard::new(deck.get(0).unwrap().clone(), true)],
        lookahead: Lookahead::new(
            deck.get(1).unwrap().clone(),
            deck.get(2).unwrap().clone(),
        ),
        clock_or_lives: match mode {
            GameMode::Timed => rules.start_clock_secs,
            GameMode::Lives => rules.start_lives,
        },
        last_misplacement: None,
        used,
        round_seed: 99,
        draws: 3,
    }
}

fn unwrap_placed(reply: PlacementReply) -> crate::domain::round::PlacementResult {
    match reply {
        PlacementReply::Placed(result) => result,
        PlacementReply::Ignored => panic!("expected a placement, got a no-op"),
    }
}

#[test]
fn start_seeds_one_correct_card_and_two_lookahead_slots() {
    let deck = Deck::new((0..10).map(|i| card(&format!("c{i}"), 1900 + i)).collect());
    let state = RoundState::start(&deck, GameMode::Timed, RoundRules::default(), 42).unwrap();

    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.played.len(), 1);
    assert!(state.played[0].outcome.correct);
    assert!(state.lookahead.next.is_some());
    assert!(state.lookahead.next_but_one.is_some());
    assert_eq!(state.clock_or_lives, 60);
    assert_eq!(state.score(), 0);
    assert_eq!(state.used.remaining(), 7);

    // Seed and both queued cards are pairwise distinct.
    let ids = [
        state.played[0].card.id.clone(),
        state.lookahead.next.as_ref().unwrap().id.clone(),
        state.lookahead.next_but_one.as_ref().unwrap().id.clone(),
    ];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[0], ids[2]);
    assert_ne!(ids[1], ids[2]);
}

#[test]
fn start_is_deterministic_per_seed() {
    let deck = Deck::new((0..20).map(|i| card(&format!("c{i}"), 1800 + i)).collect());
    let a = RoundState::start(&deck, GameMode::Lives, RoundRules::default(), 7).unwrap();
    let b = RoundState::start(&deck, GameMode::Lives, RoundRules::default(), 7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn start_fails_on_a_deck_too_small_to_seed() {
    let deck = Deck::new(vec![card("a", 1900), card("b", 1950)]);
    let result = RoundState::start(&deck, GameMode::Timed, RoundRules::default(), 1);
    assert_eq!(result, Err(DomainError::ExhaustedDeck));
}

// Scenario: deck A/B/C, seed A. B inserted at the end is correct; C inserted
// at the start is incorrect with magnitude 100 and lands tagged incorrect.
#[test]
fn placement_scenario_correct_then_misplaced() {
    let deck = Deck::new(vec![
        card("A", 1900),
        card("B", 1950),
        card("C", 2000),
        card("X", 1600),
        card("Y", 1601),
    ]);
    let mut state = playing_state(&deck, GameMode::Lives, RoundRules::default());

    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(1)));
    assert!(result.outcome.correct);
    assert_eq!(result.magnitude, 0);
    assert!(result.drawn.is_some());
    assert_eq!(
        state.played.iter().map(|p| p.card.id.as_str()).collect::<Vec<_>>(),
        vec!["A", "B"]
    );
    assert!(state.last_misplacement.is_none());

    // C was promoted into the offer slot without a re-draw.
    assert_eq!(state.lookahead.next.as_ref().map(|c| c.id.as_str()), Some("C"));

    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(0)));
    assert!(!result.outcome.correct);
    assert_eq!(result.magnitude, 100);
    assert_eq!(
        state.played.iter().map(|p| p.card.id.as_str()).collect::<Vec<_>>(),
        vec!["C", "A", "B"]
    );
    assert!(!state.played[0].outcome.correct);
    assert_eq!(state.last_misplacement.map(|m| (m.index, m.magnitude)), Some((0, 100)));
    assert_eq!(state.score(), 1);
}

// Scenario: timed mode, clock 60. Incorrect costs 5, the next correct
// placement earns 2 back.
#[test]
fn timed_mode_penalty_then_bonus() {
    let deck = Deck::new(vec![
        card("A", 1900),
        card("B", 2000),
        card("C", 2100),
        card("D", 3000),
        card("E", 3001),
    ]);
    let mut state = playing_state(&deck, GameMode::Timed, RoundRules::default());
    assert_eq!(state.clock_or_lives, 60);

    // B (2000) dropped before A (1900): incorrect.
    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(0)));
    assert!(!result.outcome.correct);
    assert_eq!(state.clock_or_lives, 55);

    // C (2100) dropped at the end: correct.
    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(2)));
    assert!(result.outcome.correct);
    assert_eq!(state.clock_or_lives, 57);
}

#[test]
fn timed_penalty_floors_at_zero_and_terminates() {
    let deck = Deck::new(vec![
        card("A", 1900),
        card("B", 2000),
        card("C", 2100),
        card("D", 3000),
    ]);
    let rules = RoundRules {
        start_clock_secs: 3,
        ..RoundRules::default()
    };
    let mut state = playing_state(&deck, GameMode::Timed, rules);

    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(0)));
    assert!(!result.outcome.correct);
    assert_eq!(state.clock_or_lives, 0);
    assert_eq!(
        state.phase,
        Phase::Terminated {
            reason: TerminalReason::TimeUp
        }
    );
}

// Scenario: lives mode with 3 lives terminates exactly after the third
// consecutive misplacement.
#[test]
fn lives_mode_terminates_after_third_mistake() {
    // Years strictly decrease after the seed, so appending at the end is
    // always a misplacement no matter which filler gets drawn.
    let deck = Deck::new(vec![
        card("A", 1900),
        card("B", 1000),
        card("C", 500),
        card("D", 100),
        card("E", 90),
        card("F", 80),
        card("G", 70),
    ]);
    let mut state = playing_state(&deck, GameMode::Lives, RoundRules::default());
    assert_eq!(state.clock_or_lives, 3);

    for expected_lives in [2u16, 1] {
        let end = state.played.len();
        let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(end)));
        assert!(!result.outcome.correct);
        assert_eq!(state.clock_or_lives, expected_lives);
        assert_eq!(state.phase, Phase::Playing);
    }

    let end = state.played.len();
    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(end)));
    assert!(!result.outcome.correct);
    assert_eq!(state.clock_or_lives, 0);
    assert_eq!(
        state.phase,
        Phase::Terminated {
            reason: TerminalReason::LivesOut
        }
    );
}

// Scenario: advancing the lookahead with the whole deck excluded is fatal
// and distinguishable from a normal game over.
#[test]
fn deck_exhaustion_mid_round_forces_termination() {
    let deck = Deck::new(vec![card("A", 1900), card("B", 1950), card("C", 2000)]);
    let mut state = playing_state(&deck, GameMode::Timed, RoundRules::default());

    let result = unwrap_placed(state.attempt_placement(&deck, DropSlot::Timeline(1)));
    assert!(result.outcome.correct);
    assert!(result.drawn.is_none());
    assert_eq!(
        state.phase,
        Phase::Terminated {
            reason: TerminalReason::DeckExhausted
        }
    );
    // The placement itself still stands, and the promoted card is not lost.
    assert_eq!(state.played.len(), 2);
    assert_eq!(state.lookahead.next.as_ref().map(|c| c.id.as_str()), Some("C"));
    assert!(state.lookahead.next_but_one.is_none());
}

#[test]
fn attempts_outside_playing_are_silent_no_ops() {
    let deck = Deck::new(vec![card("A", 1900), card("B", 1950), card("C", 2000)]);

    let mut idle = RoundState::idle(GameMode::Timed, RoundRules::default());
    let before = idle.clone();
    assert_eq!(idle.attempt_placement(&deck, DropSlot::Timeline(0)), PlacementReply::Ignored);
    assert_eq!(idle, before);

    let mut terminated = playing_state(&deck, GameMode::Timed, RoundRules::default());
    terminated.phase = Phase::Terminated {
        reason: TerminalReason::TimeUp,
    };
    let before = terminated.clone();
    assert_eq!(
        terminated.attempt_placement(&deck, DropSlot::Timeline(1)),
        PlacementReply::Ignored
    );
    assert_eq!(terminated, before);
}

#[test]
fn own_slot_and_out_of_range_drops_are_no_ops() {
    let deck = Deck::new(vec![
        card("A", 1900),
        card("B", 1950),
        card("C", 2000),
        card("D", 2100),
    ]);
    let mut state = playing_state(&deck, GameMode::Lives, RoundRules::default());
    let before = state.clone();

    assert_eq!(state.attempt_placement(&deck, DropSlot::Offer), PlacementReply::Ignored);
    assert_eq!(state, before);

    let out_of_range = state.played.len() + 1;
    assert_eq!(
        state.attempt_placement(&deck, DropSlot::Timeline(out_of_range)),
        PlacementReply::Ignored
    );
    assert_eq!(state, before);
}

#[test]
fn tick_counts_down_and_terminates_at_zero() {
    let deck = Deck::new(vec![card("A", 1900), card("B", 1950), card("C", 2000)]);
    let rules = RoundRules {
        start_clock_secs: 2,
        ..RoundRules::default()
    };
    let mut state = playing_state(&deck, GameMode::Timed, rules);

    state.tick();
    assert_eq!(state.clock_or_lives, 1);
    assert_eq!(state.phase, Phase::Playing);

    state.tick();
    assert_eq!(state.clock_or_lives, 0);
    assert_eq!(
        state.phase,
        Phase::Terminated {
            reason: TerminalReason::TimeUp
        }
    );

    // A queued tick arriving after termination must not mutate anything.
    let before = state.clone();
    state.tick();
    assert_eq!(state, before);
}

#[test]
fn tick_is_a_no_op_in_lives_mode() {
    let deck = Deck::new(vec![card("A", 1900), card("B", 1950), card("C", 2000)]);
    let mut state = playing_state(&deck, GameMode::Lives, RoundRules::default());
    let before = state.clone();
    state.tick();
    assert_eq!(state, before);
}
