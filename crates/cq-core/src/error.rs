//! Error types for loading and validating templates.

use crate::geom::Position;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading templates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The template file could not be parsed.
    #[error("invalid template file: {0}")]
    Json(#[from] serde_json::Error),

    /// Two monsters in a roster share the same id.
    #[error("duplicate monster id: \"{0}\"")]
    DuplicateMonster(String),

    /// The map has no rows or no columns.
    #[error("map is empty")]
    EmptyMap,

    /// A map row does not have the same width as the first row.
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A numeric cell code other than empty (0) or wall (1).
    #[error("invalid cell code {0} (expected 0 or 1)")]
    InvalidCell(u64),

    /// A map cell uses a token missing from the token table.
    #[error("unknown monster token \"{token}\" at {at}")]
    UnknownToken {
        /// The unresolved token.
        token: String,
        /// Where the token appears on the map.
        at: Position,
    },

    /// A token resolves to a monster id missing from the roster.
    #[error("token \"{token}\" refers to unknown monster \"{monster}\"")]
    UnknownMonster {
        /// The token being resolved.
        token: String,
        /// The monster id it points at.
        monster: String,
    },

    /// The designated boss is not in the roster.
    #[error("boss \"{0}\" is not in the roster")]
    UnknownBoss(String),

    /// The player start position is unusable.
    #[error("invalid start position {at}: {reason}")]
    InvalidStart {
        /// The rejected start position.
        at: Position,
        /// Why it was rejected.
        reason: &'static str,
    },
}
