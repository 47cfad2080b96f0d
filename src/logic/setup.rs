//! Match start: transition from Ready to InProgress with a drawn opponent.

use crate::logic::random::ChoiceSource;
use crate::models::{Character, Game, GameError, GamePhase};

/// Start the match: draw a random opponent from the roster, zero scores and
/// round counter, and move to InProgress. Only valid in Ready; attempting
/// to start without a character reports the choose-first condition.
pub fn start_match(
    game: &mut Game,
    source: &mut dyn ChoiceSource,
    opponents: &[Character],
) -> Result<(), GameError> {
    match game.phase {
        GamePhase::Ready => {}
        GamePhase::CharacterSelect => return Err(GameError::NoCharacterSelected),
        _ => return Err(GameError::InvalidState),
    }
    // Draw before mutating so an empty roster leaves the game untouched.
    let opponent = source.next_opponent(opponents)?;
    game.opponent = Some(opponent);
    game.clear_match_progress();
    game.phase = GamePhase::InProgress;
    Ok(())
}
