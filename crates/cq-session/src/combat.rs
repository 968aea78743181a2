//! Per-encounter combat state.

use cq_core::MonsterTemplate;
use serde::Serialize;

/// The monster being fought and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatState {
    /// Template of the monster being fought.
    pub monster: MonsterTemplate,
    /// Remaining monster hp, never above `monster.hp`.
    pub monster_hp: u32,
    /// Whether the player may attack. False while the counter-attack is
    /// pending.
    pub player_turn: bool,
}

impl CombatState {
    /// Start an encounter with a monster at full health, player to act.
    pub fn begin(monster: MonsterTemplate) -> Self {
        Self {
            monster_hp: monster.hp,
            monster,
            player_turn: true,
        }
    }

    /// Whether the monster is still standing.
    pub fn monster_alive(&self) -> bool {
        self.monster_hp > 0
    }
}

/// The result of one player attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strike {
    /// Damage dealt, at least 1.
    pub damage: u32,
    /// Monster hp left after the hit.
    pub monster_hp: u32,
}
