//! The session's high-level phase.

use serde::{Deserialize, Serialize};

/// Which phase the session is in. Exactly one is active at a time and it
/// decides which actions are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Walking the map.
    Exploring,
    /// Fighting a monster.
    Combat,
    /// Showing a level-up; closed back to exploring.
    LevelUp,
    /// The boss is dead. Only a restart leaves this mode.
    Victory,
    /// The player is dead. Only a restart leaves this mode.
    GameOver,
}

impl Mode {
    /// Whether only a restart can leave this mode.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::GameOver)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exploring => write!(f, "exploring"),
            Self::Combat => write!(f, "combat"),
            Self::LevelUp => write!(f, "level up"),
            Self::Victory => write!(f, "victory"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}
