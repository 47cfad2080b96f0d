//! Rock-paper-scissors showdown: library with models and game logic.

pub mod logic;
pub mod models;
pub mod session;

pub use logic::{play_round, start_match, ChoiceSource, RngSource, RoundPlay};
pub use models::{
    Character, Game, GameError, GameId, GamePhase, Move, Outcome, Rosters, RoundResult, Verdict,
    DEFAULT_MAX_ROUNDS,
};
pub use session::{GameSession, ResetMode};
