use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use cq_session::{Action, GameSession, SessionConfig};

use crate::display;

const HELP: &str = "\
  Moves:    n s e w  (or north/south/east/west, up/down/left/right)
  Combat:   attack (a)
  Level up: continue (c)
  Other:    look, restart, wait, help, quit (q)";

pub fn run(templates: Option<&Path>, seed: u64) -> Result<(), String> {
    let templates = super::load_templates(templates)?;
    let mut session = GameSession::new(templates, SessionConfig::default().with_seed(seed));

    println!("  {} ChronoQuest", "Starting".bold());
    println!("  Seed: {seed}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    display::print_messages(session.feed().iter());
    display::print_board(&session);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "help" => println!("{HELP}\n"),
            "look" => display::print_board(&session),
            word => match Action::parse(word) {
                Some(action) => {
                    let mark = session.feed().posted();
                    session.apply(action);
                    session.settle();
                    display::print_messages(session.feed().since(mark));
                    display::print_board(&session);
                    if session.mode().is_terminal() {
                        println!("  Type 'restart' to play again, or 'quit' to exit.\n");
                    }
                }
                None => println!("{}\n", format!("unknown command: {word}").yellow()),
            },
        }
    }

    Ok(())
}
