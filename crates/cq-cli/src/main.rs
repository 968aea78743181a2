//! Terminal front end for ChronoQuest.

mod commands;
mod display;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cq",
    about = "ChronoQuest — a small turn-based dungeon crawl",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one action word per line
    Play {
        /// RNG seed for damage rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON template file (default: built-in ChronoQuest map)
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Apply a script of action words and print the result
    Run {
        /// Action words, e.g. `e e attack attack continue`
        #[arg(required = true)]
        actions: Vec<String>,

        /// RNG seed for damage rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON template file (default: built-in ChronoQuest map)
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Do not resolve counter-attacks automatically; use `wait` to tick
        #[arg(long)]
        manual: bool,

        /// Ticks before a monster replies; settled after each action unless --manual
        #[arg(long, default_value = "1")]
        delay: u64,

        /// Print the final session snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the monster roster
    Roster {
        /// JSON template file (default: built-in ChronoQuest map)
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Print the map template
    Map {
        /// JSON template file (default: built-in ChronoQuest map)
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Write the templates as JSON, ready to edit and load with --templates
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON template file to re-export (default: built-in ChronoQuest map)
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, templates } => commands::play::run(templates.as_deref(), seed),
        Commands::Run {
            actions,
            seed,
            templates,
            manual,
            delay,
            json,
        } => commands::script::run(
            templates.as_deref(),
            &actions,
            commands::script::ScriptOptions {
                seed,
                manual,
                delay,
                json,
            },
        ),
        Commands::Roster { templates } => commands::roster::run(templates.as_deref()),
        Commands::Map { templates } => commands::map::run(templates.as_deref()),
        Commands::Export { output, templates } => {
            commands::export::run(templates.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
