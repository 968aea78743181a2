//! Game session controller for ChronoQuest.
//!
//! A [`GameSession`] owns all mutable game state: the player, the session
//! copy of the map, the current [`Mode`] with its combat state, and the
//! bounded [`MessageFeed`]. Actions move it between modes; the monster's
//! counter-attack is a deferred step driven by [`GameSession::tick`] rather
//! than wall-clock time, so every outcome is reproducible from the seed in
//! [`SessionConfig`].

pub mod action;
pub mod combat;
pub mod config;
pub mod feed;
pub mod mode;
pub mod session;
pub mod snapshot;

pub use action::{Action, MoveOutcome};
pub use combat::{CombatState, Strike};
pub use config::SessionConfig;
pub use feed::MessageFeed;
pub use mode::Mode;
pub use session::GameSession;
pub use snapshot::Snapshot;
