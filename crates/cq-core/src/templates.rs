//! The template bundle a session is started from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::geom::Position;
use crate::map::{Cell, MapTemplate, TileMap};
use crate::monster::{MonsterTemplate, Roster};

/// Roster, map, boss and start position, validated against each other.
///
/// Shared read-only by every session built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    roster: Roster,
    map: MapTemplate,
    boss: String,
    start: Position,
}

/// On-disk layout of a template file.
#[derive(Debug, Serialize, Deserialize)]
struct TemplateFile {
    boss: String,
    start: Position,
    monsters: Vec<MonsterTemplate>,
    map: MapFile,
}

#[derive(Debug, Serialize, Deserialize)]
struct MapFile {
    rows: Vec<Vec<Cell>>,
    tokens: BTreeMap<String, String>,
}

impl Templates {
    /// Bundle templates, checking that every map token resolves to a roster
    /// entry, the boss is in the roster, and the start cell is walkable and
    /// free of monsters.
    pub fn new(
        roster: Roster,
        map: MapTemplate,
        boss: impl Into<String>,
        start: Position,
    ) -> CoreResult<Self> {
        let boss = boss.into();
        for (token, monster) in map.tokens() {
            if roster.get(monster).is_none() {
                return Err(CoreError::UnknownMonster {
                    token: token.clone(),
                    monster: monster.clone(),
                });
            }
        }
        if roster.get(&boss).is_none() {
            return Err(CoreError::UnknownBoss(boss));
        }
        let reason = match map.grid().get(start) {
            None => Some("outside the map"),
            Some(Cell::Wall) => Some("on a wall"),
            Some(Cell::Marker(_)) => Some("on a monster"),
            Some(Cell::Empty) => None,
        };
        if let Some(reason) = reason {
            return Err(CoreError::InvalidStart { at: start, reason });
        }
        Ok(Self {
            roster,
            map,
            boss,
            start,
        })
    }

    /// Parse and validate a JSON template file.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let templates = Self::parse(json);
        if let Err(e) = &templates {
            log::warn!("rejected template file: {e}");
        }
        templates
    }

    fn parse(json: &str) -> CoreResult<Self> {
        let file: TemplateFile = serde_json::from_str(json)?;
        let roster = Roster::from_templates(file.monsters)?;
        let grid = TileMap::from_rows(file.map.rows)?;
        let map = MapTemplate::new(grid, file.map.tokens)?;
        Self::new(roster, map, file.boss, file.start)
    }

    /// Serialize back to the template file format.
    pub fn to_json(&self) -> CoreResult<String> {
        let file = TemplateFile {
            boss: self.boss.clone(),
            start: self.start,
            monsters: self.roster.iter().cloned().collect(),
            map: MapFile {
                rows: self.map.grid().rows().to_vec(),
                tokens: self.map.tokens().clone(),
            },
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The monster roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The map template.
    pub fn map(&self) -> &MapTemplate {
        &self.map
    }

    /// Id of the monster whose defeat wins the game.
    pub fn boss(&self) -> &str {
        &self.boss
    }

    /// Whether `monster` is the boss.
    pub fn is_boss(&self, monster: &MonsterTemplate) -> bool {
        monster.id == self.boss
    }

    /// Where the player starts.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The monster a marker token stands for.
    pub fn monster_for_token(&self, token: &str) -> Option<&MonsterTemplate> {
        self.map.resolve(token).and_then(|id| self.roster.get(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    const SMALL: &str = r#"{
        "boss": "dragon",
        "start": { "x": 1, "y": 1 },
        "monsters": [
            { "id": "slime", "name": "Slime", "sprite": "s", "hp": 10, "attack": 3, "defense": 1, "xp": 5 },
            { "id": "dragon", "name": "Dragon", "sprite": "D", "hp": 100, "attack": 15, "defense": 10, "xp": 100 }
        ],
        "map": {
            "rows": [
                [1, 1, 1, 1],
                [1, 0, "M1", 1],
                [1, "B", 0, 1],
                [1, 1, 1, 1]
            ],
            "tokens": { "M1": "slime", "B": "dragon" }
        }
    }"#;

    fn with(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut v: serde_json::Value = serde_json::from_str(SMALL).unwrap();
        edit(&mut v);
        v.to_string()
    }

    #[test]
    fn loads_valid_file() {
        let t = Templates::from_json(SMALL).unwrap();
        assert_eq!(t.roster().len(), 2);
        assert_eq!(t.boss(), "dragon");
        assert_eq!(t.start(), Position::new(1, 1));
        assert_eq!(t.map().grid().width(), 4);
        assert_eq!(t.monster_for_token("M1").unwrap().id, "slime");
        assert!(t.is_boss(t.monster_for_token("B").unwrap()));
        assert!(t.monster_for_token("M9").is_none());
    }

    #[test]
    fn json_round_trip() {
        let t = Templates::from_json(SMALL).unwrap();
        let again = Templates::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(t, again);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Templates::from_json("{ not json"),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn rejects_unknown_token() {
        let json = with(|v| v["map"]["rows"][1][1] = "M9".into());
        assert!(matches!(
            Templates::from_json(&json),
            Err(CoreError::UnknownToken { .. })
        ));
    }

    #[test]
    fn rejects_token_for_missing_monster() {
        let json = with(|v| v["map"]["tokens"]["M1"] = "goblin".into());
        assert!(matches!(
            Templates::from_json(&json),
            Err(CoreError::UnknownMonster { .. })
        ));
    }

    #[test]
    fn rejects_unknown_boss() {
        let json = with(|v| v["boss"] = "lich".into());
        assert!(matches!(
            Templates::from_json(&json),
            Err(CoreError::UnknownBoss(b)) if b == "lich"
        ));
    }

    #[test]
    fn rejects_bad_start() {
        for (x, y) in [(0, 0), (2, 1), (7, 7)] {
            let json = with(|v| v["start"] = serde_json::json!({ "x": x, "y": y }));
            assert!(matches!(
                Templates::from_json(&json),
                Err(CoreError::InvalidStart { .. })
            ));
        }
    }

    struct Capture;

    static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn every_rejection_is_logged() {
        static CAPTURE: Capture = Capture;
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Warn);

        let rejected = [
            "{ not json".to_string(),
            with(|v| v["monsters"][1]["id"] = "slime".into()),
            with(|v| v["map"]["rows"] = serde_json::json!([])),
            with(|v| v["map"]["rows"][2] = serde_json::json!([1, 0])),
            with(|v| v["map"]["rows"][1][1] = "M9".into()),
            with(|v| v["boss"] = "lich".into()),
        ];
        for json in &rejected {
            let err = Templates::from_json(json).unwrap_err();
            let expected = format!("rejected template file: {err}");
            assert!(
                WARNINGS.lock().unwrap().contains(&expected),
                "no warning for {err}"
            );
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let json = with(|v| v["map"]["rows"][2] = serde_json::json!([1, 0]));
        assert!(matches!(
            Templates::from_json(&json),
            Err(CoreError::RaggedRow { row: 2, .. })
        ));
    }
}
