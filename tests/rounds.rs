//! Tests for round resolution against scripted opponent moves.

use rps_showdown_web::{
    play_round, start_match, Character, ChoiceSource, Game, GameError, GamePhase, Move, Outcome,
    RoundPlay, Verdict,
};

/// Opponent that plays a fixed script, cycling if it runs out, and always
/// picks the first roster entry at match start.
struct Scripted {
    moves: Vec<Move>,
    next: usize,
}

impl Scripted {
    fn always(m: Move) -> Self {
        Self {
            moves: vec![m],
            next: 0,
        }
    }
}

impl ChoiceSource for Scripted {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        m
    }

    fn next_opponent(&mut self, roster: &[Character]) -> Result<Character, GameError> {
        roster.first().cloned().ok_or(GameError::EmptyRoster)
    }
}

fn running_game(source: &mut Scripted) -> Game {
    let mut game = Game::new();
    game.select_character(Character::new("guardian", "guardian", "", "images/guardian.png"))
        .unwrap();
    let roster = [Character::new("totoro", "Totoro", "", "images/totoro.png")];
    start_match(&mut game, source, &roster).unwrap();
    game
}

#[test]
fn winning_every_round_sweeps_the_match() {
    let mut source = Scripted::always(Move::Scissors);
    let mut game = running_game(&mut source);

    for round in 1..=3u32 {
        let play = play_round(&mut game, &mut source, Move::Rock).unwrap();
        let result = match play {
            RoundPlay::Played(r) => r,
            RoundPlay::Concluded => panic!("round {round} unexpectedly concluded"),
        };
        assert_eq!(result.round, round);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.player_score, round);
        assert_eq!(result.opponent_score, 0);
        assert_eq!(result.match_over, round == 3);
    }

    assert_eq!(game.player_score, 3);
    assert_eq!(game.opponent_score, 0);
    assert_eq!(game.phase, GamePhase::Finished);
    assert_eq!(game.current_round, 4);
    assert_eq!(game.verdict, Some(Verdict::PlayerWins));
}

#[test]
fn mixed_rounds_give_the_opponent_the_match() {
    let mut source = Scripted::always(Move::Paper);
    let mut game = running_game(&mut source);

    // Rock < Paper, Scissors > Paper, Rock < Paper
    for (mv, expected) in [
        (Move::Rock, Outcome::Lose),
        (Move::Scissors, Outcome::Win),
        (Move::Rock, Outcome::Lose),
    ] {
        match play_round(&mut game, &mut source, mv).unwrap() {
            RoundPlay::Played(r) => assert_eq!(r.outcome, expected),
            RoundPlay::Concluded => panic!("match ended early"),
        }
    }

    assert_eq!(game.player_score, 1);
    assert_eq!(game.opponent_score, 2);
    assert_eq!(game.verdict, Some(Verdict::OpponentWins));
}

#[test]
fn all_ties_draw_the_match() {
    let mut source = Scripted::always(Move::Rock);
    let mut game = running_game(&mut source);

    for _ in 0..3 {
        match play_round(&mut game, &mut source, Move::Rock).unwrap() {
            RoundPlay::Played(r) => assert_eq!(r.outcome, Outcome::Tie),
            RoundPlay::Concluded => panic!("match ended early"),
        }
    }

    assert_eq!(game.player_score, 0);
    assert_eq!(game.opponent_score, 0);
    assert_eq!(game.phase, GamePhase::Finished);
    assert_eq!(game.verdict, Some(Verdict::Draw));
}

#[test]
fn round_messages_narrate_the_exchange() {
    let mut source = Scripted::always(Move::Scissors);
    let mut game = running_game(&mut source);

    match play_round(&mut game, &mut source, Move::Rock).unwrap() {
        RoundPlay::Played(r) => assert_eq!(r.message, "You win! Rock beats Scissors."),
        RoundPlay::Concluded => panic!("match ended early"),
    }
    match play_round(&mut game, &mut source, Move::Paper).unwrap() {
        RoundPlay::Played(r) => assert_eq!(r.message, "You lose! Scissors beats Paper."),
        RoundPlay::Concluded => panic!("match ended early"),
    }
    match play_round(&mut game, &mut source, Move::Scissors).unwrap() {
        RoundPlay::Played(r) => assert_eq!(r.message, "It's a tie!"),
        RoundPlay::Concluded => panic!("match ended early"),
    }
}

#[test]
fn play_round_requires_a_running_match() {
    let mut source = Scripted::always(Move::Rock);
    let mut game = Game::new();
    let before = game.clone();
    assert!(matches!(
        play_round(&mut game, &mut source, Move::Rock),
        Err(GameError::InvalidState)
    ));
    assert_eq!(game, before);
}

#[test]
fn rounds_past_the_limit_are_a_silent_no_op() {
    let mut source = Scripted::always(Move::Scissors);
    let mut game = running_game(&mut source);
    // Force the defensive guard directly: a running phase with the round
    // counter already past the limit must not touch state.
    game.current_round = game.max_rounds + 1;
    let before = game.clone();

    let play = play_round(&mut game, &mut source, Move::Rock).unwrap();
    assert_eq!(play, RoundPlay::Concluded);
    assert_eq!(game, before);
}

#[test]
fn finished_verdict_never_changes() {
    let mut source = Scripted::always(Move::Scissors);
    let mut game = running_game(&mut source);
    for _ in 0..3 {
        play_round(&mut game, &mut source, Move::Rock).unwrap();
    }
    assert_eq!(game.verdict, Some(Verdict::PlayerWins));

    // A further submission is rejected and the verdict stays frozen.
    assert!(matches!(
        play_round(&mut game, &mut source, Move::Paper),
        Err(GameError::InvalidState)
    ));
    assert_eq!(game.verdict, Some(Verdict::PlayerWins));
    assert_eq!(game.player_score, 3);
}
