//! Monster templates and the roster they are looked up in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Immutable stats for one kind of monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    /// Unique id, referenced by the map token table and the boss designation.
    pub id: String,
    /// Display name used in messages.
    pub name: String,
    /// Sprite glyph for renderers.
    pub sprite: String,
    /// Starting (and maximum) hit points.
    pub hp: u32,
    /// Attack stat.
    pub attack: u32,
    /// Defense stat.
    pub defense: u32,
    /// Experience awarded when defeated.
    pub xp: u32,
}

impl MonsterTemplate {
    /// Create a template. The sprite defaults to the first letter of the name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let sprite = name.chars().next().map(String::from).unwrap_or_default();
        Self {
            id: id.into(),
            name,
            sprite,
            hp: 1,
            attack: 0,
            defense: 0,
            xp: 0,
        }
    }

    /// Set the sprite glyph.
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Set hit points, attack and defense.
    pub fn with_stats(mut self, hp: u32, attack: u32, defense: u32) -> Self {
        self.hp = hp;
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Set the experience reward.
    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = xp;
        self
    }
}

/// The set of monster templates available to a map, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    monsters: Vec<MonsterTemplate>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from templates, rejecting duplicate ids.
    pub fn from_templates(templates: impl IntoIterator<Item = MonsterTemplate>) -> CoreResult<Self> {
        let mut roster = Self::new();
        for template in templates {
            roster.insert(template)?;
        }
        Ok(roster)
    }

    /// Add a template. Fails if its id is already present.
    pub fn insert(&mut self, template: MonsterTemplate) -> CoreResult<()> {
        if self.get(&template.id).is_some() {
            return Err(CoreError::DuplicateMonster(template.id));
        }
        self.monsters.push(template);
        Ok(())
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Iterate templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.monsters.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Whether the roster has no templates.
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}
