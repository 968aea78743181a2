//! Tile grids: the immutable map template and the per-session copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::geom::Position;

/// A single map cell.
///
/// Serialized the way template files write cells: `0` for empty, `1` for a
/// wall, or the marker token as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell", into = "RawCell")]
pub enum Cell {
    /// Walkable floor.
    Empty,
    /// Impassable wall.
    Wall,
    /// A monster marker, resolved through the token table.
    Marker(String),
}

impl Cell {
    /// Whether this cell blocks movement.
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }

    /// The marker token, if this cell holds one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Marker(token) => Some(token),
            _ => None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Code(u64),
    Token(String),
}

impl TryFrom<RawCell> for Cell {
    type Error = CoreError;

    fn try_from(raw: RawCell) -> CoreResult<Self> {
        match raw {
            RawCell::Code(0) => Ok(Self::Empty),
            RawCell::Code(1) => Ok(Self::Wall),
            RawCell::Code(n) => Err(CoreError::InvalidCell(n)),
            RawCell::Token(token) => Ok(Self::Marker(token)),
        }
    }
}

impl From<Cell> for RawCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::Code(0),
            Cell::Wall => Self::Code(1),
            Cell::Marker(token) => Self::Token(token),
        }
    }
}

/// A rectangular grid of cells, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileMap {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl TileMap {
    /// Build a grid from rows. Rows must be non-empty and equally wide.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> CoreResult<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(CoreError::EmptyMap);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(CoreError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self {
            width,
            height: rows.len(),
            rows,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell at `pos`, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.y)?.get(pos.x)
    }

    /// Replace the cell at `pos` with empty floor, returning what was there.
    pub fn clear(&mut self, pos: Position) -> Option<Cell> {
        let cell = self.rows.get_mut(pos.y)?.get_mut(pos.x)?;
        Some(std::mem::replace(cell, Cell::Empty))
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Every marker cell with its position, in row-major order.
    pub fn markers(&self) -> impl Iterator<Item = (Position, &str)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.token().map(|t| (Position::new(x, y), t)))
        })
    }
}

/// The immutable map layout plus its token → monster-id table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapTemplate {
    grid: TileMap,
    tokens: BTreeMap<String, String>,
}

impl MapTemplate {
    /// Pair a grid with its token table. Every marker on the grid must have an
    /// entry in the table.
    pub fn new(grid: TileMap, tokens: BTreeMap<String, String>) -> CoreResult<Self> {
        if let Some((at, token)) = grid.markers().find(|(_, t)| !tokens.contains_key(*t)) {
            return Err(CoreError::UnknownToken {
                token: token.to_string(),
                at,
            });
        }
        Ok(Self { grid, tokens })
    }

    /// The template grid.
    pub fn grid(&self) -> &TileMap {
        &self.grid
    }

    /// The token → monster-id table.
    pub fn tokens(&self) -> &BTreeMap<String, String> {
        &self.tokens
    }

    /// The monster id a token stands for.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    /// A fresh mutable copy of the grid for one session.
    pub fn instantiate(&self) -> TileMap {
        self.grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn marker(t: &str) -> Cell {
        Cell::Marker(t.to_string())
    }

    fn small_grid() -> TileMap {
        TileMap::from_rows(vec![
            vec![Cell::Wall, Cell::Wall, Cell::Wall],
            vec![Cell::Wall, Cell::Empty, marker("M1")],
            vec![Cell::Wall, Cell::Wall, Cell::Wall],
        ])
        .unwrap()
    }

    #[test]
    fn grid_dimensions() {
        let grid = small_grid();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.contains(Position::new(2, 2)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(grid.get(Position::new(0, 3)).is_none());
    }

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(TileMap::from_rows(vec![]), Err(CoreError::EmptyMap)));
        assert!(matches!(
            TileMap::from_rows(vec![vec![]]),
            Err(CoreError::EmptyMap)
        ));
    }

    #[test]
    fn ragged_grid_rejected() {
        let err = TileMap::from_rows(vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2]]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn clear_replaces_marker() {
        let mut grid = small_grid();
        let old = grid.clear(Position::new(2, 1));
        assert_eq!(old, Some(marker("M1")));
        assert_eq!(grid.get(Position::new(2, 1)), Some(&Cell::Empty));
        assert_eq!(grid.clear(Position::new(9, 9)), None);
    }

    #[test]
    fn markers_listed() {
        let grid = small_grid();
        let found: Vec<_> = grid.markers().collect();
        assert_eq!(found, vec![(Position::new(2, 1), "M1")]);
    }

    #[test]
    fn template_requires_known_tokens() {
        let err = MapTemplate::new(small_grid(), BTreeMap::new()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownToken { ref token, .. } if token == "M1"));
    }

    #[test]
    fn instantiate_is_independent_copy() {
        let tokens = BTreeMap::from([("M1".to_string(), "slime".to_string())]);
        let template = MapTemplate::new(small_grid(), tokens).unwrap();
        let mut copy = template.instantiate();
        copy.clear(Position::new(2, 1));
        assert_eq!(
            template.grid().get(Position::new(2, 1)),
            Some(&marker("M1"))
        );
        assert_eq!(template.resolve("M1"), Some("slime"));
    }

    #[test]
    fn cell_json_format() {
        let cells: Vec<Cell> = serde_json::from_str(r#"[0, 1, "B"]"#).unwrap();
        assert_eq!(cells, vec![Cell::Empty, Cell::Wall, marker("B")]);
        assert_eq!(serde_json::to_string(&cells).unwrap(), r#"[0,1,"B"]"#);
        assert!(serde_json::from_str::<Vec<Cell>>("[2]").is_err());
    }

    proptest! {
        #[test]
        fn first_short_or_long_row_is_reported(
            widths in prop::collection::vec(1usize..6, 1..8),
        ) {
            let rows = widths.iter().map(|&w| vec![Cell::Empty; w]).collect();
            let result = TileMap::from_rows(rows);
            match widths.iter().position(|&w| w != widths[0]) {
                None => {
                    let map = result.unwrap();
                    prop_assert_eq!(map.width(), widths[0]);
                    prop_assert_eq!(map.height(), widths.len());
                }
                Some(row) => prop_assert!(matches!(
                    result,
                    Err(CoreError::RaggedRow { row: r, expected, found })
                        if r == row && expected == widths[0] && found == widths[row]
                ), "expected RaggedRow at row {}, got {:?}", row, result),
            }
        }
    }
}
