//! Read-only view of a session for renderers.

use cq_core::TileMap;
use cq_mechanics::{LevelUp, Player};
use serde::Serialize;

use crate::combat::CombatState;
use crate::mode::Mode;

/// Everything a renderer needs after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Player stats and position.
    pub player: Player,
    /// Current mode.
    pub mode: Mode,
    /// The session copy of the map.
    pub map: TileMap,
    /// The current encounter, present only in combat.
    pub combat: Option<CombatState>,
    /// Details of the level-up being shown, present only in level-up mode.
    pub level_up: Option<LevelUp>,
    /// Feed messages, oldest first.
    pub messages: Vec<String>,
    /// Session clock.
    pub tick: u64,
    /// Whether a monster counter-attack is scheduled.
    pub awaiting_reply: bool,
}
