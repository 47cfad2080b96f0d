//! Character records and the fixed selection rosters.

use serde::{Deserialize, Serialize};

/// An immutable character: created at startup from roster configuration,
/// never mutated. `id` is the key the UI sends when selecting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Path to the character portrait, relative to the static root.
    pub image: String,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

/// The two rosters: player-selectable characters and the opponent pool the
/// match start draws from. Built once at startup, immutable thereafter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rosters {
    pub players: Vec<Character>,
    pub opponents: Vec<Character>,
}

impl Rosters {
    pub fn new(players: Vec<Character>, opponents: Vec<Character>) -> Self {
        Self { players, opponents }
    }

    /// Look up a selectable player character by id.
    pub fn player(&self, id: &str) -> Option<&Character> {
        self.players.iter().find(|c| c.id == id)
    }

    /// The built-in rosters: 3 selectable characters, 7 opponents.
    pub fn builtin() -> Self {
        let players = vec![
            Character::new(
                "guardian",
                "Guardian",
                "A steadfast protector who never blinks first.",
                "images/guardian.png",
            ),
            Character::new(
                "sorceress",
                "Sorceress",
                "Reads three moves ahead, or so she claims.",
                "images/sorceress.png",
            ),
            Character::new(
                "wanderer",
                "Wanderer",
                "Trusts the road, the rain, and a good throw of rock.",
                "images/wanderer.png",
            ),
        ];
        let opponents = vec![
            Character::new(
                "totoro",
                "Totoro",
                "A gentle forest giant with a surprisingly quick paw.",
                "images/totoro.png",
            ),
            Character::new(
                "no-face",
                "No-Face",
                "Mirrors whatever it sees. Or does it?",
                "images/no-face.png",
            ),
            Character::new(
                "calcifer",
                "Calcifer",
                "A fire demon. Scissors make him nervous.",
                "images/calcifer.png",
            ),
            Character::new(
                "ponyo",
                "Ponyo",
                "Loves ham and throwing paper.",
                "images/ponyo.png",
            ),
            Character::new(
                "jiji",
                "Jiji",
                "A black cat with impeccable timing.",
                "images/jiji.png",
            ),
            Character::new(
                "kodama",
                "Kodama",
                "Tree spirits rattle before every throw.",
                "images/kodama.png",
            ),
            Character::new(
                "haku",
                "Haku",
                "A river spirit who never plays the same move twice. Allegedly.",
                "images/haku.png",
            ),
        ];
        Self::new(players, opponents)
    }
}
