use std::path::Path;

use cq_session::{Action, GameSession, SessionConfig};

use crate::display;

/// Flags of the `run` command.
pub struct ScriptOptions {
    pub seed: u64,
    pub manual: bool,
    pub delay: u64,
    pub json: bool,
}

pub fn run(templates: Option<&Path>, words: &[String], options: ScriptOptions) -> Result<(), String> {
    let actions = words
        .iter()
        .map(|w| Action::parse(w).ok_or_else(|| format!("unknown action '{w}'")))
        .collect::<Result<Vec<_>, _>>()?;

    let templates = super::load_templates(templates)?;
    let config = SessionConfig::default()
        .with_seed(options.seed)
        .with_reply_delay(options.delay);
    let mut session = GameSession::new(templates, config);

    if !options.json {
        display::print_messages(session.feed().iter());
    }

    for action in actions {
        let mark = session.feed().posted();
        let applied = session.apply(action);
        if !options.manual {
            session.settle();
        }
        if !options.json {
            println!("> {action}{}", if applied { "" } else { " (no effect)" });
            display::print_messages(session.feed().since(mark));
        }
    }

    if options.json {
        let json = serde_json::to_string_pretty(&session.snapshot()).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!();
        display::print_board(&session);
    }

    Ok(())
}
