//! Tests for move resolution and the randomness source.

use rps_showdown_web::{Character, ChoiceSource, GameError, Move, Outcome, RngSource};

#[test]
fn equal_moves_always_tie() {
    for m in Move::ALL {
        assert_eq!(Outcome::resolve(m, m), Outcome::Tie);
    }
}

#[test]
fn beats_relation_matches_the_three_winning_pairs() {
    assert!(Move::Rock.beats(Move::Scissors));
    assert!(Move::Paper.beats(Move::Rock));
    assert!(Move::Scissors.beats(Move::Paper));

    assert!(!Move::Scissors.beats(Move::Rock));
    assert!(!Move::Rock.beats(Move::Paper));
    assert!(!Move::Paper.beats(Move::Scissors));
}

#[test]
fn resolve_is_total_and_antisymmetric() {
    for a in Move::ALL {
        for b in Move::ALL {
            let forward = Outcome::resolve(a, b);
            let backward = Outcome::resolve(b, a);
            if a == b {
                assert_eq!(forward, Outcome::Tie);
                assert_eq!(backward, Outcome::Tie);
            } else {
                // Win one way iff Lose the other; never both for the same pair.
                match forward {
                    Outcome::Win => assert_eq!(backward, Outcome::Lose),
                    Outcome::Lose => assert_eq!(backward, Outcome::Win),
                    Outcome::Tie => panic!("{a:?} vs {b:?} tied with a != b"),
                }
            }
        }
    }
}

#[test]
fn rng_source_produces_every_move() {
    let mut source = RngSource;
    let mut seen = [false; 3];
    for _ in 0..300 {
        match source.next_move() {
            Move::Rock => seen[0] = true,
            Move::Paper => seen[1] = true,
            Move::Scissors => seen[2] = true,
        }
    }
    // With 300 uniform draws, missing a move is a ~1e-53 event.
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn rng_source_draws_opponents_from_the_roster_only() {
    let roster = vec![
        Character::new("totoro", "Totoro", "", "images/totoro.png"),
        Character::new("jiji", "Jiji", "", "images/jiji.png"),
    ];
    let mut source = RngSource;
    for _ in 0..50 {
        let drawn = source.next_opponent(&roster).unwrap();
        assert!(roster.contains(&drawn));
    }
}

#[test]
fn empty_roster_is_rejected() {
    let mut source = RngSource;
    assert!(matches!(
        source.next_opponent(&[]),
        Err(GameError::EmptyRoster)
    ));
}
