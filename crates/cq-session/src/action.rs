//! Externally invocable session actions.

use cq_core::{Direction, Position};
use serde::{Deserialize, Serialize};

/// An action a front end can apply to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Step one cell.
    Move(Direction),
    /// Attack the current monster.
    Attack,
    /// Dismiss the level-up screen.
    CloseLevelUp,
    /// Start over from level 1.
    Restart,
    /// Let one tick pass.
    Wait,
}

impl Action {
    /// Parse an action word. Direction words (see [`Direction::parse`]) are
    /// moves; `attack`/`a`, `continue`/`c`, `restart` and `wait` map to the
    /// other actions.
    pub fn parse(word: &str) -> Option<Self> {
        if let Some(dir) = Direction::parse(word) {
            return Some(Self::Move(dir));
        }
        match word.trim().to_lowercase().as_str() {
            "a" | "attack" => Some(Self::Attack),
            "c" | "continue" => Some(Self::CloseLevelUp),
            "restart" => Some(Self::Restart),
            "wait" => Some(Self::Wait),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Move(dir) => write!(f, "move {dir}"),
            Self::Attack => write!(f, "attack"),
            Self::CloseLevelUp => write!(f, "continue"),
            Self::Restart => write!(f, "restart"),
            Self::Wait => write!(f, "wait"),
        }
    }
}

/// What a move attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not exploring, or not a unit step. Nothing changed.
    Ignored,
    /// The target is off the map. Nothing changed.
    OutOfBounds,
    /// The target is a wall. A message was posted.
    Blocked,
    /// The player stepped onto empty floor.
    Moved(Position),
    /// The player stepped onto a monster and combat began.
    Encounter {
        /// Where the encounter happened.
        at: Position,
        /// Id of the monster met.
        monster: String,
    },
}
