//! Round resolution: draw the opponent move, score it, advance or finish.

use crate::logic::random::ChoiceSource;
use crate::models::{Game, GameError, GamePhase, Move, Outcome, RoundResult, Verdict};

/// What a round submission did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoundPlay {
    /// A round was resolved; state was updated.
    Played(RoundResult),
    /// The match had already concluded; nothing changed. Deliberate
    /// idempotence guard, not an error.
    Concluded,
}

/// Play one round: draw the opponent's move, resolve, update scores, and
/// advance the round counter or finish the match.
///
/// Requires InProgress. A submission past the last round is a silent no-op
/// (`RoundPlay::Concluded`) rather than an error.
pub fn play_round(
    game: &mut Game,
    source: &mut dyn ChoiceSource,
    player_move: Move,
) -> Result<RoundPlay, GameError> {
    if game.phase != GamePhase::InProgress {
        return Err(GameError::InvalidState);
    }
    if game.current_round > game.max_rounds {
        return Ok(RoundPlay::Concluded);
    }

    let opponent_move = source.next_move();
    let outcome = Outcome::resolve(player_move, opponent_move);
    match outcome {
        Outcome::Win => game.player_score += 1,
        Outcome::Lose => game.opponent_score += 1,
        Outcome::Tie => {}
    }

    let round = game.current_round;
    let match_over = round >= game.max_rounds;
    if match_over {
        game.current_round = game.max_rounds + 1;
        finish(game);
    } else {
        game.current_round += 1;
    }

    let result = RoundResult {
        round,
        player_move,
        opponent_move,
        outcome,
        player_score: game.player_score,
        opponent_score: game.opponent_score,
        match_over,
        message: round_message(player_move, opponent_move, outcome),
    };
    game.last_round = Some(result.clone());
    Ok(RoundPlay::Played(result))
}

/// Conclude the match: freeze the verdict and compose the final message.
/// Writes them only once; a finished game's result never changes.
fn finish(game: &mut Game) {
    game.phase = GamePhase::Finished;
    if game.verdict.is_some() {
        return;
    }
    let verdict = Verdict::from_scores(game.player_score, game.opponent_score);
    game.verdict = Some(verdict);
    game.final_message = Some(final_message(game, verdict));
}

/// Round narration in the original game's voice.
fn round_message(player_move: Move, opponent_move: Move, outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => format!("You win! {} beats {}.", player_move, opponent_move),
        Outcome::Lose => format!("You lose! {} beats {}.", opponent_move, player_move),
        Outcome::Tie => "It's a tie!".to_string(),
    }
}

/// Final narration naming both characters.
fn final_message(game: &Game, verdict: Verdict) -> String {
    let player = game
        .character
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("Player");
    let opponent = game
        .opponent
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("Opponent");
    match verdict {
        Verdict::PlayerWins => format!(
            "CONGRATULATIONS! {} won the best of {} against {}!",
            player, game.max_rounds, opponent
        ),
        Verdict::OpponentWins => format!(
            "GAME OVER. {} won the best of {} against {}.",
            opponent, game.max_rounds, player
        ),
        Verdict::Draw => format!(
            "It's a DRAW! {} and {} tied the best of {}.",
            player, opponent, game.max_rounds
        ),
    }
}
