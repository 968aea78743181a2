//! Damage rolls shared by the player and monsters.

use rand::Rng;

/// Smallest random adjustment to a hit.
pub const MIN_SWING: i64 = -1;
/// Largest random adjustment to a hit.
pub const MAX_SWING: i64 = 1;
/// Every hit deals at least this much.
pub const MIN_DAMAGE: u32 = 1;

/// Roll the random adjustment for one hit, uniform over `MIN_SWING..=MAX_SWING`.
pub fn roll_swing(rng: &mut impl Rng) -> i64 {
    rng.random_range(MIN_SWING..=MAX_SWING)
}

/// Damage of a hit: attack minus defense plus swing, never below
/// [`MIN_DAMAGE`].
pub fn damage(attack: u32, defense: u32, swing: i64) -> u32 {
    let raw = i64::from(attack) - i64::from(defense) + swing;
    u32::try_from(raw.max(i64::from(MIN_DAMAGE))).unwrap_or(u32::MAX)
}

/// Roll a swing and compute the damage of a hit.
pub fn roll_damage(attack: u32, defense: u32, rng: &mut impl Rng) -> u32 {
    damage(attack, defense, roll_swing(rng))
}
