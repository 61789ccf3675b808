//! # OOP Recipe
//!
//! Command-line entry point for the lesson collection.
//!
//! ## 🚀 Usage
//!
//! ```bash
//! oop-recipe list         # show the available lessons
//! oop-recipe run bank     # run one lesson
//! oop-recipe all          # run the full curriculum (the default)
//! ```
//!
//! Lessons read from stdin and write to stdout; logging goes to stderr and
//! is controlled with `RUST_LOG`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use oop_recipe::console::StdConsole;
use oop_recipe::curriculum::tracing::setup_tracing;
use oop_recipe::curriculum::Curriculum;

#[derive(Parser)]
#[command(name = "oop-recipe", version, about = "Introductory object-oriented console lessons")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the available lessons
    List,
    /// Run a single lesson by name
    Run { name: String },
    /// Run the full curriculum in teaching order
    All,
}

fn main() -> ExitCode {
    setup_tracing();

    let cli = Cli::parse();
    let curriculum = Curriculum::standard();
    let mut console = StdConsole::new();

    info!("starting oop-recipe");
    let result = match cli.command.unwrap_or(Command::All) {
        Command::List => curriculum.write_listing(&mut console),
        Command::Run { name } => curriculum.run(&name, &mut console),
        Command::All => curriculum.run_all(&mut console),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "run failed");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
