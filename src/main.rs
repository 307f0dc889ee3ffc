//! Numberle - CLI
//!
//! Numberle game with TUI and CLI modes, plus equation checking tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numberle::{
    commands::{check_equation, run_audit, run_simple},
    core::Equation,
    corpus::{
        EQUATIONS,
        loader::{equations_from_slice, load_from_file},
    },
    game::{GameConfig, GameSession, Selection},
    logging::init_logging,
    output::{print_audit_result, print_check_result},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "numberle",
    about = "Numberle: guess the hidden equation in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Equation corpus: 'all' (default, embedded list) or path to file
    #[arg(short = 'e', long, global = true, default_value = "all")]
    equations: String,

    /// Always play the first equation of the corpus instead of a random one
    #[arg(long, global = true)]
    fixed: bool,

    /// Seed for random target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Reveal the target equation at the start of each game (for testing)
    #[arg(long, global = true)]
    show_target: bool,

    /// Don't explain why an invalid guess was rejected
    #[arg(long, global = true)]
    quiet_errors: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether an equation is a valid guess
    Check {
        /// The equation to check, e.g. 1+2+3=6
        equation: String,
    },

    /// Validate every equation in the corpus
    Audit,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            selection: if self.fixed {
                Selection::First
            } else {
                Selection::Random
            },
            seed: self.seed,
            show_target: self.show_target,
            show_errors: !self.quiet_errors,
        }
    }
}

/// Load the equation corpus based on the -e flag
fn load_equations(mode: &str) -> Result<Vec<Equation>> {
    match mode {
        "all" => Ok(equations_from_slice(EQUATIONS)),
        path => load_from_file(path)
            .with_context(|| format!("failed to load equation corpus from {path}")),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // Logging to stderr would corrupt the TUI, so it needs a file there
    if !matches!(command, Commands::Play) || cli.log_file.is_some() {
        init_logging(cli.verbose, cli.log_file.as_deref())?;
    }

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { equation } => Ok(run_check_command(equation)),
        Commands::Audit => run_audit_command(&cli),
    }
}

fn new_session(cli: &Cli) -> Result<GameSession> {
    let equations = load_equations(&cli.equations)?;
    info!(count = equations.len(), source = %cli.equations, "equation corpus loaded");
    GameSession::new(equations, cli.game_config()).context("failed to start a game")
}

fn run_play_command(cli: &Cli) -> Result<ExitCode> {
    use numberle::interactive::{App, run_tui};

    let app = App::new(new_session(cli)?);
    run_tui(app)?;
    Ok(ExitCode::SUCCESS)
}

fn run_simple_command(cli: &Cli) -> Result<ExitCode> {
    run_simple(new_session(cli)?).map_err(|e| anyhow::anyhow!(e))?;
    Ok(ExitCode::SUCCESS)
}

fn run_check_command(equation: &str) -> ExitCode {
    let result = check_equation(equation);
    print_check_result(&result);

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_audit_command(cli: &Cli) -> Result<ExitCode> {
    let equations = load_equations(&cli.equations)?;
    println!("🔍 Auditing {} equations...", equations.len());

    let report = run_audit(&equations, true);
    print_audit_result(&report);

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
