//! Combat and progression rules for ChronoQuest.
//!
//! Provides the player sheet with its level-1 defaults, the damage roll used
//! by both sides of a fight, and experience/level-up progression. Nothing here
//! knows about modes or turns; the session crate sequences these rules.

pub mod damage;
pub mod progression;
pub mod sheet;

pub use damage::{MAX_SWING, MIN_DAMAGE, MIN_SWING, damage, roll_damage, roll_swing};
pub use progression::{LevelUp, award_xp};
pub use sheet::{Player, StartingStats};
