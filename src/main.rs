//! Mastermind - CLI
//!
//! Code-breaking game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_guess},
    core::Palette,
    game::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig, RoundController},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colors allowed in a code, one character each
    #[arg(short, long, global = true, default_value = "RGBYOP")]
    colors: String,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: u32,

    /// Seed for reproducible hidden codes
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a known secret code
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the game configuration from the global flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let palette = Palette::parse(&cli.colors).context("invalid --colors")?;
    let config = GameConfig::new(palette, cli.length, cli.attempts)?;
    log::debug!(
        "Config: colors {}, length {}, attempts {}",
        config.palette(),
        config.code_length(),
        config.max_attempts()
    );
    Ok(config)
}

fn build_controller(config: GameConfig, seed: Option<u64>) -> RoundController {
    match seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            RoundController::seeded(config, seed)
        }
        None => RoundController::from_os_rng(config),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.seed),
        Commands::Simple => run_simple_command(config, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&config, &secret, &guess),
    }
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(build_controller(config, seed));
    run_tui(app)
}

fn run_simple_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut controller = build_controller(config, seed);
    let summary = run_simple(&mut controller)?;
    log::info!("Session over: {} won, {} lost", summary.won, summary.lost);
    Ok(())
}

fn run_score_command(config: &GameConfig, secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(config, secret, guess)?;
    print_score_result(&result);
    Ok(())
}
