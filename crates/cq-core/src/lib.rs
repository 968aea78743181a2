//! Core template types for ChronoQuest.
//!
//! Holds the immutable reference data a game session is built from: monster
//! templates and the roster, the tile map template with its token table, and
//! the [`Templates`] bundle that ties them to a boss and a starting position.
//! Ships the canonical ChronoQuest tables in [`data`].

pub mod data;
pub mod error;
pub mod geom;
pub mod map;
pub mod monster;
pub mod render;
pub mod templates;

pub use error::{CoreError, CoreResult};
pub use geom::{Direction, Position};
pub use map::{Cell, MapTemplate, TileMap};
pub use monster::{MonsterTemplate, Roster};
pub use templates::Templates;
