//! rps-referee - play Rock-Paper-Scissors-Plus against a random bot.

use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use rps_plus::{run_console, ConsoleOptions, RefereeConfig, Session};

/// Rock-Paper-Scissors-Plus referee
#[derive(Parser, Debug)]
#[command(name = "rps-referee")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rounds
    #[arg(short, long, default_value_t = rps_plus::core::DEFAULT_MAX_ROUNDS)]
    rounds: u32,

    /// Seed for the bot (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print nothing when the bot takes a round (legacy transcript)
    #[arg(long)]
    legacy_transcript: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> RefereeConfig {
        let config = RefereeConfig::new().with_max_rounds(self.rounds);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let options = ConsoleOptions::new().with_legacy_transcript(args.legacy_transcript);

    let result = Session::random(&args.config()).and_then(|mut session| {
        let stdin = io::stdin();
        let stdout = BufWriter::new(io::stdout());
        run_console(&mut session, stdin.lock(), stdout, options)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
