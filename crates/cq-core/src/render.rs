//! Plain-text rendering of a session map.

use crate::geom::Position;
use crate::map::{Cell, TileMap};
use crate::templates::Templates;

/// Glyph for walls.
pub const WALL: char = '#';
/// Glyph for empty floor.
pub const FLOOR: char = '.';
/// Glyph for an ordinary monster marker.
pub const MONSTER: char = 'm';
/// Glyph for the boss marker.
pub const BOSS: char = 'B';
/// Glyph for the player.
pub const PLAYER: char = '@';

/// Render `map` one text line per row, with the player drawn at `player`.
pub fn ascii(templates: &Templates, map: &TileMap, player: Option<Position>) -> String {
    let mut lines = Vec::with_capacity(map.height());
    for (y, row) in map.rows().iter().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, cell)| {
                if player == Some(Position::new(x, y)) {
                    return PLAYER;
                }
                match cell {
                    Cell::Empty => FLOOR,
                    Cell::Wall => WALL,
                    Cell::Marker(token) => match templates.monster_for_token(token) {
                        Some(m) if templates.is_boss(m) => BOSS,
                        _ => MONSTER,
                    },
                }
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}
