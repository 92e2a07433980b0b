use crate::domain::deck::{Deck, UsedMarks};
use crate::domain::lookahead::Lookahead;
use crate::domain::cards::PlayedCard;
use crate::domain::rules::RoundRules;
use crate::domain::snapshot::{snapshot, PhaseSnapshot};
use crate::domain::state::{GameMode, Phase, RoundState, TerminalReason};
use crate::domain::test_gens::card_at;

fn playing_fixture() -> RoundState {
    let deck = Deck::new((0..5).map(|i| card_at(i, 1900 + i as i32)).collect());
    let mut used = UsedMarks::new(deck.len());
    for index in 0..=2 {
        used.mark(index);
    }
    RoundState {
        phase: Phase::Playing,
        mode: GameMode::Timed,
        rules: RoundRules::default(),
        played: vec![PlayedCard::new(deck.get(0).unwrap().clone(), true)],
        lookahead: Lookahead::new(
            deck.get(1).unwrap().clone(),
            deck.get(2).unwrap().clone(),
        ),
        clock_or_lives: 42,
        last_misplacement: None,
        used,
        round_seed: 1,
        draws: 3,
    }
}

#[test]
fn idle_round_snapshots_to_idle() {
    let state = RoundState::idle(GameMode::Lives, RoundRules::default());
    let snap = snapshot(&state);
    assert_eq!(snap.phase, PhaseSnapshot::Idle);
    assert_eq!(snap.round.score, 0);
}

#[test]
fn playing_snapshot_exposes_the_offer_but_not_the_tail() {
    let state = playing_fixture();
    let snap = snapshot(&state);

    let PhaseSnapshot::Playing(playing) = snap.phase else {
        panic!("expected a playing snapshot");
    };
    assert_eq!(playing.clock_or_lives, 42);
    assert_eq!(playing.next.as_ref().map(|c| c.id.as_str()), Some("evt-0001"));
    assert_eq!(playing.played.len(), 1);

    // The tail slot is internal pre-fetch state and must not leak into the
    // rendered view.
    let json = serde_json::to_value(&playing).unwrap();
    assert!(json.get("next_but_one").is_none());
}

#[test]
fn terminated_snapshot_carries_reason_and_final_score() {
    let mut state = playing_fixture();
    state.played.push(PlayedCard::new(
        state.lookahead.next.clone().unwrap(),
        true,
    ));
    state.phase = Phase::Terminated {
        reason: TerminalReason::DeckExhausted,
    };

    let snap = snapshot(&state);
    let PhaseSnapshot::Terminated(terminated) = snap.phase else {
        panic!("expected a terminated snapshot");
    };
    assert_eq!(terminated.reason, TerminalReason::DeckExhausted);
    assert_eq!(terminated.final_score, 1);
    assert_eq!(terminated.played.len(), 2);
}

#[test]
fn snapshot_serializes_with_phase_tag() {
    let snap = snapshot(&playing_fixture());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["phase"]["phase"], "Playing");
    assert_eq!(json["round"]["mode"], "timed");
}
