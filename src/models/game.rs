//! Game aggregate: phase machine, scores, round counter, and errors.

use crate::models::character::Character;
use crate::models::moves::{Move, Outcome, Verdict};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// Rounds per match unless configured otherwise.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// The game is not in a phase that allows this action.
    InvalidState,
    /// Tried to start a match before picking a character.
    NoCharacterSelected,
    /// Character id not present in the player roster.
    UnknownCharacter(String),
    /// The opponent roster passed to a draw was empty.
    EmptyRoster,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidState => write!(f, "Invalid state for this action"),
            GameError::NoCharacterSelected => write!(f, "Choose a character first"),
            GameError::UnknownCharacter(id) => write!(f, "Unknown character: {}", id),
            GameError::EmptyRoster => write!(f, "Opponent roster is empty"),
        }
    }
}

/// Current phase of the game.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Home screen: waiting for the player to pick a character.
    #[default]
    CharacterSelect,
    /// Character picked; match not started (re-selection still allowed).
    Ready,
    /// Match running; moves are accepted.
    InProgress,
    /// All rounds played; verdict is set and frozen.
    Finished,
}

/// Summary of one resolved round. The presentation renders this directly
/// and never recomputes the outcome itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-indexed number of the round that was just played.
    pub round: u32,
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    pub player_score: u32,
    pub opponent_score: u32,
    /// True when this round concluded the match.
    pub match_over: bool,
    /// Round narration, e.g. "You win! Rock beats Scissors."
    pub message: String,
}

/// Full state of one game session: selection, scores, round progress,
/// last round summary, and the frozen verdict once finished.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub phase: GamePhase,
    pub player_score: u32,
    pub opponent_score: u32,
    /// 1-indexed; `max_rounds + 1` means the match has concluded.
    pub current_round: u32,
    pub max_rounds: u32,
    /// Set from the first selection onward; cleared only by a full reset.
    pub character: Option<Character>,
    /// Drawn at match start; set exactly while InProgress or Finished.
    pub opponent: Option<Character>,
    /// Last resolved round (for display); None before the first round.
    pub last_round: Option<RoundResult>,
    /// Match result; set once on finish, never changed afterwards.
    pub verdict: Option<Verdict>,
    /// Final narration naming both characters; set together with the verdict.
    pub final_message: Option<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game on the character-selection screen.
    pub fn new() -> Self {
        Self::with_max_rounds(DEFAULT_MAX_ROUNDS)
    }

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: GamePhase::CharacterSelect,
            player_score: 0,
            opponent_score: 0,
            current_round: 1,
            max_rounds,
            character: None,
            opponent: None,
            last_round: None,
            verdict: None,
            final_message: None,
        }
    }

    /// Pick (or re-pick) the player character. Valid before the match starts;
    /// mid-match or after the match requires a reset first.
    pub fn select_character(&mut self, character: Character) -> Result<(), GameError> {
        if !matches!(self.phase, GamePhase::CharacterSelect | GamePhase::Ready) {
            return Err(GameError::InvalidState);
        }
        self.character = Some(character);
        self.phase = GamePhase::Ready;
        Ok(())
    }

    /// Full reset: back to the selection screen with everything cleared.
    /// Valid from any phase.
    pub fn reset_to_selection(&mut self) {
        self.phase = GamePhase::CharacterSelect;
        self.character = None;
        self.opponent = None;
        self.clear_match_progress();
    }

    /// Partial reset ("play again"): keep the character/opponent pairing,
    /// zero scores and round, and go straight back into a running match.
    /// Requires an opponent from a previous start.
    pub fn reset_rematch(&mut self) -> Result<(), GameError> {
        if self.opponent.is_none() {
            return Err(GameError::InvalidState);
        }
        self.clear_match_progress();
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Zero scores, round counter, and per-match results. Phase and the
    /// selected pairing are left to the caller.
    pub(crate) fn clear_match_progress(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.current_round = 1;
        self.last_round = None;
        self.verdict = None;
        self.final_message = None;
    }
}
