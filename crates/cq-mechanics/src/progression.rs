//! Experience awards and levelling.

use serde::{Deserialize, Serialize};

use crate::sheet::Player;

/// Max hp gained per level.
pub const HP_PER_LEVEL: u32 = 10;
/// Attack gained per level.
pub const ATTACK_PER_LEVEL: u32 = 2;
/// Defense gained per level.
pub const DEFENSE_PER_LEVEL: u32 = 1;

/// What changed when the player levelled up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The new level.
    pub level: u32,
    /// Experience carried past the old threshold.
    pub carried_xp: u32,
    /// The new threshold.
    pub xp_to_next_level: u32,
}

/// The threshold after `current`: one and a half times it, rounded down.
pub fn next_threshold(current: u32) -> u32 {
    u32::try_from(u64::from(current) * 3 / 2).unwrap_or(u32::MAX)
}

/// Add `xp` to the player. Crossing the threshold levels up once: the excess
/// carries over, the threshold grows, max hp, attack and defense rise and hp
/// is refilled.
pub fn award_xp(player: &mut Player, xp: u32) -> Option<LevelUp> {
    let total = player.xp.saturating_add(xp);
    if total < player.xp_to_next_level {
        player.xp = total;
        return None;
    }

    player.level += 1;
    player.xp = total - player.xp_to_next_level;
    player.xp_to_next_level = next_threshold(player.xp_to_next_level);
    player.max_hp += HP_PER_LEVEL;
    player.hp = player.max_hp;
    player.attack += ATTACK_PER_LEVEL;
    player.defense += DEFENSE_PER_LEVEL;
    log::debug!(
        "level {} reached, {} xp carried, next at {}",
        player.level,
        player.xp,
        player.xp_to_next_level
    );

    Some(LevelUp {
        level: player.level,
        carried_xp: player.xp,
        xp_to_next_level: player.xp_to_next_level,
    })
}
