//! Wordle Game - CLI
//!
//! Five-letter word guessing game with TUI and line modes, plus tools to
//! check a single guess and audit the feedback matcher.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use wordle_game::{
    commands::{check_guess, print_audit_report, run_audit, run_simple},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT},
    logging,
    output::print_check_result,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word with colored per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum guesses per round (1-20)
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(1..=MAX_ATTEMPTS_LIMIT as u64)
    )]
    attempts: usize,

    /// Reject a guess that was already tried this round
    #[arg(long, global = true)]
    no_repeats: bool,

    /// Seed for secret selection (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode over stdin/stdout without the TUI
    Simple,

    /// Show the feedback for one guess against one secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Compare every word against every other word and verify the feedback
    Audit {
        /// Limit number of secrets to audit
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::from_file(path)
            .with_context(|| format!("Failed to read word list from {path}"))?,
    };

    if dictionary.is_empty() {
        bail!("Word list '{wordlist}' has no five-letter words");
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = GameConfig::new()
        .with_max_attempts(cli.attempts)
        .with_repeats(!cli.no_repeats);

    let mut rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, config, rng)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let status = run_simple(&dictionary, config, &mut rng)?;
            log::info!("Round finished: {status:?}");
            Ok(())
        }
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Audit { limit } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_audit_command(&dictionary, limit)
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng)?;
    run_tui(app)
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("Cannot compare these words")?;

    print_check_result(&result.secret, &result.annotated);
    Ok(())
}

fn run_audit_command(dictionary: &Dictionary, limit: Option<usize>) -> Result<()> {
    println!("\n{}", "═".repeat(60));
    println!(" Matcher Audit ");
    println!("{}", "═".repeat(60));
    println!("\nWord list: {} words", dictionary.len());
    if let Some(limit) = limit {
        println!("Secret limit: {limit}");
    }
    println!();

    let report = run_audit(dictionary.words(), limit, true);
    print_audit_report(&report);

    if !report.passed() {
        bail!(
            "Matcher audit found {} violations",
            report.tally.violations.len()
        );
    }
    Ok(())
}
