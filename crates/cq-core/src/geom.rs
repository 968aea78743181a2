//! Grid coordinates and movement directions.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the map. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0 at the left edge.
    pub x: usize,
    /// Row, 0 at the top edge.
    pub y: usize,
}

impl Position {
    /// Create a position from column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The position shifted by a signed delta, or `None` if it would leave
    /// the non-negative quadrant.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx as isize)?,
            y: self.y.checked_add_signed(dy as isize)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four legal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Up, towards row 0.
    North,
    /// Down, towards the last row.
    South,
    /// Right.
    East,
    /// Left.
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The `(dx, dy)` step for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The direction matching a unit step, if there is one.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (0, 1) => Some(Self::South),
            (1, 0) => Some(Self::East),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    /// Parse a direction word: compass names, their initials, or
    /// `up`/`down`/`left`/`right`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "up" => Some(Self::North),
            "s" | "south" | "down" => Some(Self::South),
            "e" | "east" | "right" => Some(Self::East),
            "w" | "west" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}
