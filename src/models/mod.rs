//! Data structures for the showdown: moves, characters, game state.

mod character;
mod game;
mod moves;

pub use character::{Character, Rosters};
pub use game::{Game, GameError, GameId, GamePhase, RoundResult, DEFAULT_MAX_ROUNDS};
pub use moves::{Move, Outcome, Verdict};
