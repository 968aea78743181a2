//! The game session state machine.
//!
//! Modes move `exploring → combat → {exploring | level up | victory | game
//! over}` and `level up → exploring`; a restart returns any mode to
//! exploring. A player hit on a surviving monster leaves combat waiting for
//! the monster's reply, which fires on a later [`GameSession::tick`].

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use cq_core::{Cell, Direction, MonsterTemplate, Templates, TileMap};
use cq_mechanics::{LevelUp, Player, award_xp, roll_damage};

use crate::action::{Action, MoveOutcome};
use crate::combat::{CombatState, Strike};
use crate::config::SessionConfig;
use crate::feed::MessageFeed;
use crate::mode::Mode;
use crate::snapshot::Snapshot;

/// First message of every session.
pub const WELCOME: &str = "Welcome to ChronoQuest! Use arrow keys to move.";

/// Mode together with the data that only exists in that mode.
#[derive(Debug, Clone)]
enum Phase {
    Exploring,
    Combat(CombatState),
    LevelUp(LevelUp),
    Victory,
    GameOver,
}

/// One playthrough: player, session map, mode and message feed.
pub struct GameSession {
    templates: Arc<Templates>,
    config: SessionConfig,
    player: Player,
    map: TileMap,
    phase: Phase,
    feed: MessageFeed,
    rng: StdRng,
    clock: u64,
    reply_due: Option<u64>,
}

impl GameSession {
    /// Start a session on shared templates.
    pub fn new(templates: Arc<Templates>, config: SessionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let player = Player::new(&config.starting, templates.start());
        let map = templates.map().instantiate();
        let feed = MessageFeed::new(config.feed_capacity);

        let mut session = Self {
            templates,
            config,
            player,
            map,
            phase: Phase::Exploring,
            feed,
            rng,
            clock: 0,
            reply_due: None,
        };
        session.reset();
        session
    }

    /// Restart from level 1: default player at the start cell, full map, no
    /// combat, a fresh feed, and any pending counter-attack dropped.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config.starting, self.templates.start());
        self.map = self.templates.map().instantiate();
        self.phase = Phase::Exploring;
        self.reply_due = None;
        self.feed.reset(WELCOME);
        log::debug!("session reset at tick {}", self.clock);
    }

    /// The templates this session was built from.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The session copy of the map.
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// The message feed.
    pub fn feed(&self) -> &MessageFeed {
        &self.feed
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self.phase {
            Phase::Exploring => Mode::Exploring,
            Phase::Combat(_) => Mode::Combat,
            Phase::LevelUp(_) => Mode::LevelUp,
            Phase::Victory => Mode::Victory,
            Phase::GameOver => Mode::GameOver,
        }
    }

    /// The current encounter. Present only in combat.
    pub fn combat(&self) -> Option<&CombatState> {
        match &self.phase {
            Phase::Combat(combat) => Some(combat),
            _ => None,
        }
    }

    /// The level-up being shown. Present only in level-up mode.
    pub fn level_up(&self) -> Option<&LevelUp> {
        match &self.phase {
            Phase::LevelUp(up) => Some(up),
            _ => None,
        }
    }

    /// Current tick of the session clock.
    pub fn tick_count(&self) -> u64 {
        self.clock
    }

    /// Whether a monster counter-attack is scheduled.
    pub fn awaiting_reply(&self) -> bool {
        self.reply_due.is_some()
    }

    /// Append a message to the feed.
    pub fn post_message(&mut self, message: impl Into<String>) {
        self.feed.push(message);
    }

    /// Step one cell in `direction`.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy)
    }

    /// Try to move by a unit step. Only legal while exploring; anything other
    /// than the four unit steps is ignored.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if !matches!(self.phase, Phase::Exploring) || Direction::from_delta(dx, dy).is_none() {
            return MoveOutcome::Ignored;
        }
        let Some(target) = self
            .player
            .position
            .offset(dx, dy)
            .filter(|&p| self.map.contains(p))
        else {
            return MoveOutcome::OutOfBounds;
        };

        let cell = self.map.get(target).cloned().unwrap_or(Cell::Wall);
        if cell.is_wall() {
            self.feed.push("A wall blocks your path.");
            return MoveOutcome::Blocked;
        }

        self.player.position = target;
        let Some(monster) = cell
            .token()
            .and_then(|t| self.templates.monster_for_token(t))
            .cloned()
        else {
            return MoveOutcome::Moved(target);
        };

        self.map.clear(target);
        log::debug!("encounter with {} at {target}", monster.id);
        self.feed.push(format!("A wild {} appears!", monster.name));
        let id = monster.id.clone();
        self.phase = Phase::Combat(CombatState::begin(monster));
        MoveOutcome::Encounter {
            at: target,
            monster: id,
        }
    }

    /// Hit the current monster. Only legal in combat on the player's turn.
    ///
    /// A killing blow resolves the fight at once; otherwise the monster's
    /// reply is scheduled `reply_delay` ticks ahead.
    pub fn attack(&mut self) -> Option<Strike> {
        let Phase::Combat(combat) = &mut self.phase else {
            return None;
        };
        if !combat.player_turn {
            return None;
        }
        combat.player_turn = false;

        let damage = roll_damage(self.player.attack, combat.monster.defense, &mut self.rng);
        combat.monster_hp = combat.monster_hp.saturating_sub(damage);
        let strike = Strike {
            damage,
            monster_hp: combat.monster_hp,
        };
        self.feed.push(format!(
            "You attack the {} for {damage} damage.",
            combat.monster.name
        ));

        if strike.monster_hp == 0 {
            let monster = combat.monster.clone();
            self.defeat(monster);
        } else {
            self.reply_due = Some(self.clock + self.config.reply_delay);
        }
        Some(strike)
    }

    fn defeat(&mut self, monster: MonsterTemplate) {
        self.feed.push(format!("You defeated the {}!", monster.name));
        self.feed.push(format!("You gain {} XP.", monster.xp));

        let level_up = award_xp(&mut self.player, monster.xp);
        let leveled = level_up.is_some();
        if let Some(up) = level_up {
            log::info!("player reached level {}", up.level);
            self.phase = Phase::LevelUp(up);
            self.feed.push("LEVEL UP! Your stats have increased!");
        }

        // A boss kill wins even when it also levelled the player up.
        if self.templates.is_boss(&monster) {
            log::info!("boss {} defeated at tick {}", monster.id, self.clock);
            self.phase = Phase::Victory;
            self.feed.push(format!(
                "You defeated the {}! You are victorious!",
                monster.name
            ));
        } else if !leveled {
            self.phase = Phase::Exploring;
        }
    }

    /// Dismiss the level-up screen and return to exploring.
    pub fn close_level_up(&mut self) -> bool {
        if !matches!(self.phase, Phase::LevelUp(_)) {
            return false;
        }
        self.phase = Phase::Exploring;
        true
    }

    /// Advance the clock one tick. Returns true if a counter-attack resolved.
    pub fn tick(&mut self) -> bool {
        self.clock += 1;
        match self.reply_due {
            Some(due) if due <= self.clock => {
                self.reply_due = None;
                self.monster_reply()
            }
            _ => false,
        }
    }

    /// Tick until no counter-attack is pending. Returns the ticks taken.
    pub fn settle(&mut self) -> u64 {
        let start = self.clock;
        while self.reply_due.is_some() {
            self.tick();
        }
        self.clock - start
    }

    fn monster_reply(&mut self) -> bool {
        let Phase::Combat(combat) = &mut self.phase else {
            return false;
        };
        if !combat.monster_alive() {
            return false;
        }

        let damage = roll_damage(combat.monster.attack, self.player.defense, &mut self.rng);
        self.player.take_damage(damage);
        self.feed.push(format!(
            "The {} attacks you for {damage} damage.",
            combat.monster.name
        ));

        if self.player.is_dead() {
            log::info!("player killed by {} at tick {}", combat.monster.id, self.clock);
            self.phase = Phase::GameOver;
            self.feed.push("You have been defeated. Game Over.");
        } else {
            combat.player_turn = true;
        }
        true
    }

    /// Apply an action. Returns whether it had any effect.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Move(dir) => !matches!(
                self.step(dir),
                MoveOutcome::Ignored | MoveOutcome::OutOfBounds
            ),
            Action::Attack => self.attack().is_some(),
            Action::CloseLevelUp => self.close_level_up(),
            Action::Restart => {
                self.reset();
                true
            }
            Action::Wait => self.tick(),
        }
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            mode: self.mode(),
            map: self.map.clone(),
            combat: self.combat().cloned(),
            level_up: self.level_up().cloned(),
            messages: self.feed.iter().map(str::to_string).collect(),
            tick: self.clock,
            awaiting_reply: self.awaiting_reply(),
        }
    }
}
