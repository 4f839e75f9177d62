//! pure-io binary
//!
//! Runs the example console programs against the terminal.
//!
//! Usage:
//!   pure-io [--seed <SEED>] [-v] [hello | countdown [FROM] | guess | menu]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pure_io::apps::{
    COUNTDOWN_MAX, COUNTDOWN_MIN, countdown, guess_number, hello, menu, prompt_int_between,
};
use pure_io::console::{ConsoleProgram, StdioHandler};
use pure_io::{Interpreter, Traced};

#[derive(Parser)]
#[command(name = "pure-io")]
#[command(about = "Console programs described as pure values and run by a trampoline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random numbers (default: operating system entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a name and greet it
    Hello,

    /// Count down to BOOM
    Countdown {
        /// Number to start from (default: ask for one)
        from: Option<i64>,

        /// Smallest number accepted when asking
        #[arg(long, default_value_t = COUNTDOWN_MIN)]
        min: i64,

        /// Largest number accepted when asking
        #[arg(long, default_value_t = COUNTDOWN_MAX)]
        max: i64,
    },

    /// Guess a random number
    Guess {
        /// Lower bound of the secret number
        #[arg(long, default_value_t = 1)]
        min: i64,

        /// Upper bound of the secret number
        #[arg(long, default_value_t = 20)]
        max: i64,
    },

    /// Pick programs from a menu until Exit
    Menu,
}

impl Commands {
    fn program(self) -> Result<ConsoleProgram<()>> {
        let program = match self {
            Self::Hello => hello(),
            Self::Countdown {
                from: Some(from), ..
            } => countdown(from),
            Self::Countdown {
                from: None,
                min,
                max,
            } => {
                anyhow::ensure!(min <= max, "empty countdown range {min}..={max}");
                prompt_int_between(min, max).chain(countdown)
            }
            Self::Guess { min, max } => {
                anyhow::ensure!(min <= max, "empty guessing range {min}..={max}");
                guess_number(min, max).map(|_| ())
            }
            Self::Menu => menu(),
        };
        Ok(program)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the program
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let program = cli.command.unwrap_or(Commands::Menu).program()?;

    let handler = match cli.seed {
        Some(seed) => StdioHandler::stdio().with_seed(seed),
        None => StdioHandler::stdio(),
    };
    let mut interpreter = Interpreter::new(Traced::new(handler));
    interpreter.run(program).context("program stopped")?;

    let stats = interpreter.stats();
    info!(
        steps = stats.steps,
        effects = stats.effects,
        reassociations = stats.reassociations,
        "finished"
    );
    Ok(())
}
