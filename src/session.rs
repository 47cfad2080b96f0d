//! GameSession: the operations the presentation layer calls.
//!
//! Owns one [`Game`], the rosters, and the randomness source. The web layer
//! keeps one session per game id; nothing else holds a reference to the
//! state, so all access is serial by construction.

use crate::logic::{play_round, start_match, ChoiceSource, RngSource, RoundPlay};
use crate::models::{Game, GameError, Move, Rosters};

/// Which kind of reset the player asked for. Explicit at every call site;
/// there is no default.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    /// Clear everything and return to the character-selection screen.
    ToSelection,
    /// Keep the character/opponent pairing and start a fresh match.
    Rematch,
}

/// One game session: state plus the collaborators needed to run it.
pub struct GameSession {
    game: Game,
    rosters: Rosters,
    source: Box<dyn ChoiceSource + Send + Sync>,
}

impl GameSession {
    /// New session with the built-in rosters and thread-rng draws.
    pub fn new() -> Self {
        Self::with_rosters(Rosters::builtin())
    }

    pub fn with_rosters(rosters: Rosters) -> Self {
        Self::with_source(rosters, Box::new(RngSource))
    }

    /// Session with a custom randomness source (tests script the draws).
    pub fn with_source(rosters: Rosters, source: Box<dyn ChoiceSource + Send + Sync>) -> Self {
        Self {
            game: Game::new(),
            rosters,
            source,
        }
    }

    /// Current state for the presentation to render.
    pub fn view(&self) -> &Game {
        &self.game
    }

    pub fn rosters(&self) -> &Rosters {
        &self.rosters
    }

    /// Pick a character by roster id. Valid before the match starts.
    pub fn select_character(&mut self, id: &str) -> Result<(), GameError> {
        let character = self
            .rosters
            .player(id)
            .cloned()
            .ok_or_else(|| GameError::UnknownCharacter(id.to_string()))?;
        self.game.select_character(character)
    }

    /// Start the match against a randomly drawn opponent.
    pub fn start_match(&mut self) -> Result<(), GameError> {
        let opponents = self.rosters.opponents.clone();
        start_match(&mut self.game, self.source.as_mut(), &opponents)
    }

    /// Submit the player's move for the current round.
    pub fn submit_move(&mut self, player_move: Move) -> Result<RoundPlay, GameError> {
        play_round(&mut self.game, self.source.as_mut(), player_move)
    }

    /// Reset the match. Full reset always succeeds; a rematch needs an
    /// opponent from a previous start.
    pub fn reset(&mut self, mode: ResetMode) -> Result<(), GameError> {
        match mode {
            ResetMode::ToSelection => {
                self.game.reset_to_selection();
                Ok(())
            }
            ResetMode::Rematch => self.game.reset_rematch(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
