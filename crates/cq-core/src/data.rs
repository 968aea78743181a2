//! The canonical ChronoQuest roster and map.

use std::collections::BTreeMap;

use crate::geom::Position;
use crate::map::{Cell, MapTemplate, TileMap};
use crate::monster::{MonsterTemplate, Roster};
use crate::templates::Templates;

/// Map width in cells.
pub const MAP_WIDTH: usize = 15;
/// Map height in cells.
pub const MAP_HEIGHT: usize = 10;
/// Id of the final boss.
pub const BOSS_ID: &str = "dragon";
/// Where the player starts.
pub const START: Position = Position::new(1, 1);

// 0 empty, 1 wall, anything else a marker token.
const LAYOUT: [[&str; MAP_WIDTH]; MAP_HEIGHT] = [
    ["1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1"],
    ["1", "0", "0", "M1", "0", "1", "0", "0", "0", "0", "1", "0", "M2", "0", "1"],
    ["1", "0", "1", "1", "0", "1", "0", "1", "1", "1", "1", "0", "1", "0", "1"],
    ["1", "0", "1", "0", "0", "0", "0", "0", "0", "0", "0", "0", "1", "0", "1"],
    ["1", "M1", "1", "0", "1", "1", "1", "M3", "1", "1", "1", "0", "1", "0", "1"],
    ["1", "0", "0", "0", "1", "0", "0", "0", "0", "0", "1", "0", "0", "0", "1"],
    ["1", "0", "1", "1", "1", "0", "1", "1", "1", "0", "1", "1", "1", "M2", "1"],
    ["1", "0", "0", "M2", "0", "0", "1", "B", "1", "0", "0", "0", "0", "0", "1"],
    ["1", "0", "1", "1", "1", "1", "1", "0", "1", "1", "1", "1", "1", "0", "1"],
    ["1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1", "1"],
];

const TOKENS: [(&str, &str); 4] = [
    ("M1", "slime"),
    ("M2", "goblin"),
    ("M3", "skeleton"),
    ("B", BOSS_ID),
];

/// The four ChronoQuest monsters.
pub fn roster() -> Roster {
    let monsters = [
        MonsterTemplate::new("slime", "Slime")
            .with_sprite("🦠")
            .with_stats(10, 3, 1)
            .with_xp(5),
        MonsterTemplate::new("goblin", "Goblin")
            .with_sprite("👺")
            .with_stats(15, 5, 2)
            .with_xp(10),
        MonsterTemplate::new("skeleton", "Skeleton")
            .with_sprite("💀")
            .with_stats(25, 8, 4)
            .with_xp(20),
        MonsterTemplate::new(BOSS_ID, "Chrono Dragon")
            .with_sprite("🐉")
            .with_stats(100, 15, 10)
            .with_xp(100),
    ];
    Roster::from_templates(monsters)
        .unwrap_or_else(|e| unreachable!("built-in monster ids are distinct: {e}"))
}

/// The ChronoQuest map layout.
pub fn map() -> MapTemplate {
    let rows: Vec<Vec<Cell>> = LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|&c| match c {
                    "0" => Cell::Empty,
                    "1" => Cell::Wall,
                    token => Cell::Marker(token.to_string()),
                })
                .collect()
        })
        .collect();
    let tokens: BTreeMap<String, String> = TOKENS
        .iter()
        .map(|&(t, id)| (t.to_string(), id.to_string()))
        .collect();

    TileMap::from_rows(rows)
        .and_then(|grid| MapTemplate::new(grid, tokens))
        .unwrap_or_else(|e| unreachable!("built-in map is well formed: {e}"))
}

/// The full ChronoQuest template bundle.
pub fn chronoquest() -> Templates {
    Templates::new(roster(), map(), BOSS_ID, START)
        .unwrap_or_else(|e| unreachable!("built-in templates are consistent: {e}"))
}
