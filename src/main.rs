//! Spelling Bee Solver - CLI
//!
//! Plays a Spelling Bee puzzle in a browser, or solves one offline.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spelling_bee::{
    commands::{SolveConfig, run_play, solve_puzzle},
    config::{DEFAULT_URL, RunConfig},
    output::{print_play_report, print_puzzle_summary, print_queue},
    page::SessionError,
    wordlists::{DictionaryConfig, load_dictionary},
};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee solver that plays every valid word, pangrams first",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Minimum word length
    #[arg(long, global = true, default_value = "4")]
    min_length: usize,

    /// Minimum number of distinct letters in a word
    #[arg(long, global = true, default_value = "4")]
    min_unique: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the puzzle in a browser and submit every word (default)
    Play(PlayArgs),

    /// Solve a puzzle offline and print the ranked words
    Solve {
        /// The required center letter
        center: String,

        /// The other letters, e.g. "cdet"
        letters: String,

        /// Only print the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Puzzle page URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Show the browser window
    #[arg(long)]
    headed: bool,

    /// Seconds to wait for the puzzle to render
    #[arg(long, default_value = "10")]
    setup_timeout_secs: u64,

    /// Milliseconds to pause between words
    #[arg(long, default_value = "50")]
    pace_ms: u64,

    /// Wait for Enter before closing the browser
    #[arg(long)]
    keep_open: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dictionary_config = DictionaryConfig {
        min_length: cli.min_length,
        min_unique_letters: cli.min_unique,
    };

    let command = cli.command.unwrap_or_else(|| {
        Commands::Play(PlayArgs {
            url: DEFAULT_URL.to_string(),
            setup_timeout_secs: 10,
            pace_ms: 50,
            ..PlayArgs::default()
        })
    });

    match command {
        Commands::Play(args) => run_play_command(&cli.dictionary, dictionary_config, args).await,
        Commands::Solve {
            center,
            letters,
            limit,
        } => run_solve_command(&cli.dictionary, dictionary_config, center, letters, limit),
    }
}

async fn run_play_command(
    dictionary: &Path,
    dictionary_config: DictionaryConfig,
    args: PlayArgs,
) -> Result<()> {
    let config = RunConfig {
        url: args.url,
        headless: !args.headed,
        setup_timeout: Duration::from_secs(args.setup_timeout_secs),
        pace: Duration::from_millis(args.pace_ms),
        keep_open: args.keep_open,
        dictionary: dictionary_config,
        ..RunConfig::default()
    };

    let start = Instant::now();
    match run_play(dictionary, &config).await {
        Ok(report) => {
            print_play_report(&report);
            if report.submission.interrupted {
                info!("Browser closed by user");
            } else {
                info!("Completed in {:.1}s", start.elapsed().as_secs_f64());
            }
            Ok(())
        }
        Err(err) if err.downcast_ref::<SessionError>().is_some_and(SessionError::is_closed) => {
            info!("Browser closed by user");
            Ok(())
        }
        Err(err) => {
            error!("Failed after {:.1}s: {err:#}", start.elapsed().as_secs_f64());
            Err(err)
        }
    }
}

fn run_solve_command(
    dictionary: &Path,
    dictionary_config: DictionaryConfig,
    center: String,
    letters: String,
    limit: Option<usize>,
) -> Result<()> {
    use anyhow::Context;

    let dictionary = load_dictionary(dictionary, &dictionary_config)
        .with_context(|| format!("failed to load dictionary '{}'", dictionary.display()))?;

    let result = solve_puzzle(&SolveConfig::new(center, letters), &dictionary)?;
    print_puzzle_summary(&result.puzzle, &result.queue);
    print_queue(&result.queue, limit);
    Ok(())
}
