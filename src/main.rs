//! hold'gram - CLI
//!
//! Daily anagram ladder puzzle with TUI and text modes, plus catalog tools.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use holdgram::commands::{
    GenerateConfig, SessionConfig, run_check, run_generate, run_simple, run_today,
};
use holdgram::core::FLOP_LENGTH;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "holdgram",
    about = "Daily anagram ladder: solve each round to turn the next card",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'embedded' (default) or path to a catalog file
    #[arg(short, long, global = true, default_value = "embedded")]
    catalog: String,

    /// Play the puzzle of this date (YYYY-MM-DD) instead of today's
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Count days in UTC instead of the local time zone
    #[arg(long, global = true)]
    utc: bool,

    /// Seed for the flop, captions and prize
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Print today's puzzle without playing it
    Today {
        /// Also print every round of the path
        #[arg(long)]
        spoil: bool,
    },

    /// Parse every catalog line and report malformed ones
    Check,

    /// Generate a catalog from a word list
    Generate {
        /// Word list, one word per line
        wordlist: PathBuf,

        /// Write the catalog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Word length of the first round
        #[arg(short, long, default_value_t = FLOP_LENGTH)]
        length: usize,

        /// Minimum number of rounds per path
        #[arg(long, default_value = "3")]
        min: usize,

        /// Maximum number of rounds per path
        #[arg(long, default_value = "7")]
        max: usize,

        /// Write the anagram graph in DOT format here
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Print graph statistics to stderr
        #[arg(long)]
        overview: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = SessionConfig {
        catalog: cli.catalog,
        date: cli.date,
        utc: cli.utc,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(config.start()).map_err(|e| anyhow::anyhow!(e)),
        Commands::Today { spoil } => run_today(&config, spoil),
        Commands::Check => run_check(&config),
        Commands::Generate {
            wordlist,
            output,
            length,
            min,
            max,
            dot,
            overview,
        } => {
            if min > max {
                anyhow::bail!("--min {min} is greater than --max {max}");
            }

            let generate = GenerateConfig {
                output,
                length,
                rounds: min..=max,
                dot,
                overview,
                ..GenerateConfig::new(wordlist)
            };
            let result = run_generate(&generate, &mut config.rng())?;

            info!("{} classes, {} sources", result.classes, result.sources);
            eprintln!("wrote {} paths", result.lines.len());
            Ok(())
        }
    }
}

fn run_play_command(config: &SessionConfig) -> Result<()> {
    use holdgram::interactive::{App, run_tui};

    let app = App::new(config.start());
    run_tui(app)
}
