//! The player's character sheet.

use cq_core::Position;
use serde::{Deserialize, Serialize};

/// Level-1 stats a new or restarted session begins with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingStats {
    /// Starting and maximum hit points.
    pub hp: u32,
    /// Attack stat.
    pub attack: u32,
    /// Defense stat.
    pub defense: u32,
    /// Experience needed for level 2.
    pub xp_to_next_level: u32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            hp: 50,
            attack: 5,
            defense: 3,
            xp_to_next_level: 20,
        }
    }
}

/// The player: stats, progression and map position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Current hit points, never above `max_hp`.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Experience carried towards the next level.
    pub xp: u32,
    /// Experience threshold for the next level.
    pub xp_to_next_level: u32,
    /// Character level, starting at 1.
    pub level: u32,
    /// Attack stat.
    pub attack: u32,
    /// Defense stat.
    pub defense: u32,
    /// Current map cell.
    pub position: Position,
}

impl Player {
    /// A level-1 player at `position`.
    pub fn new(stats: &StartingStats, position: Position) -> Self {
        Self {
            hp: stats.hp,
            max_hp: stats.hp,
            xp: 0,
            xp_to_next_level: stats.xp_to_next_level,
            level: 1,
            attack: stats.attack,
            defense: stats.defense,
            position,
        }
    }

    /// Lose `amount` hit points, stopping at zero. Returns the remaining hp.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Whether hit points have run out.
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
