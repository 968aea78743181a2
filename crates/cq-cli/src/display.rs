//! Text output shared by the play and run commands.

use colored::{ColoredString, Colorize};
use cq_core::render;
use cq_session::GameSession;

/// Print the map with the player on it, then the status line.
pub fn print_board(session: &GameSession) {
    println!(
        "{}",
        render::ascii(
            session.templates(),
            session.map(),
            Some(session.player().position)
        )
    );
    println!("{}", status(session));
}

/// One-line player summary, plus the foe when in combat.
pub fn status(session: &GameSession) -> String {
    let p = session.player();
    let mut line = format!(
        "  Lv {} | HP {}/{} | XP {}/{} | ATK {} DEF {} | {}",
        p.level,
        p.hp,
        p.max_hp,
        p.xp,
        p.xp_to_next_level,
        p.attack,
        p.defense,
        session.mode()
    );
    if let Some(combat) = session.combat() {
        line.push_str(&format!(
            "\n  Fighting {} ({}/{} HP)",
            combat.monster.name, combat.monster_hp, combat.monster.hp
        ));
    }
    line
}

/// Print feed messages, one per line.
pub fn print_messages<'a>(messages: impl Iterator<Item = &'a str>) {
    for message in messages {
        println!("  {}", paint(message));
    }
}

fn paint(message: &str) -> ColoredString {
    if message.starts_with("LEVEL UP") {
        message.cyan().bold()
    } else if message.ends_with("victorious!") {
        message.green().bold()
    } else if message.ends_with("Game Over.") {
        message.red().bold()
    } else if message.starts_with("A wild") {
        message.yellow()
    } else {
        message.normal()
    }
}
