use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use subsift_core::{self as core, answer, IndexRange, OracleAnswers, Outcome, Partition, SessionConfig};
use tracing::warn;

mod logging;
mod prompt;

use prompt::ConsoleAnswers;

#[derive(Parser)]
#[command(name = "subsift", version, about = "Guess an integer from yes/no subset questions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct RangeArgs {
    /// Smallest index of the range
    #[arg(long, allow_negative_numbers = true)]
    lower: Option<i64>,
    /// Largest index of the range
    #[arg(long, allow_negative_numbers = true)]
    upper: Option<i64>,
    /// TOML session config; command-line bounds override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RangeArgs {
    fn resolve(&self) -> Result<SessionConfig> {
        let mut cfg = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => {
                let lower = self.lower.context("--lower is required without --config")?;
                let upper = self.upper.context("--upper is required without --config")?;
                SessionConfig::new(lower, upper)
            }
        };
        if let Some(lower) = self.lower {
            cfg.lower = lower;
        }
        if let Some(upper) = self.upper {
            cfg.upper = upper;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the membership subsets of a range
    Subsets {
        #[command(flatten)]
        range: RangeArgs,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
        /// Allow ranges wider than max_span
        #[arg(short, long)]
        yes: bool,
    },
    /// Recover an index from comma-separated yes/no answers
    Reconstruct {
        #[arg(long, allow_negative_numbers = true)]
        lower: i64,
        /// Reject answers that encode an index past this bound
        #[arg(long, allow_negative_numbers = true)]
        upper: Option<i64>,
        /// e.g. `y,n,y`
        #[arg(short, long, default_value = "")]
        answers: String,
    },
    /// Play the guessing game on the terminal
    Guess {
        #[command(flatten)]
        range: RangeArgs,
        /// Skip the confirmation for wide ranges
        #[arg(short, long)]
        yes: bool,
    },
    /// Play against an oracle that knows the secret
    Simulate {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long, allow_negative_numbers = true)]
        secret: i64,
        /// Emit the outcome as JSON instead of a transcript
        #[arg(long)]
        json: bool,
        /// Allow ranges wider than max_span
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Serialize)]
struct SubsetReport<'a> {
    lower: i64,
    upper: i64,
    bit_width: u32,
    subsets: &'a [Vec<i64>],
}

fn print_subsets(partition: &Partition) {
    for (i, subset) in partition.subsets().iter().enumerate() {
        println!("Subset {}: {:?}", i + 1, subset);
        println!("-Total: {}", subset.len());
        println!();
    }
}

/// Refuse ranges past `max_span` unless `--yes` was given.
fn ensure_within_span(cfg: &SessionConfig, yes: bool) -> Result<()> {
    if cfg.exceeds_max_span() && !yes {
        warn!(
            lower = cfg.lower,
            upper = cfg.upper,
            max_span = cfg.max_span,
            "refusing range wider than max span"
        );
        bail!(
            "range [{}, {}] is wider than max_span {}; pass --yes to continue",
            cfg.lower,
            cfg.upper,
            cfg.max_span
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Subsets { range, json, yes }) => {
            let cfg = range.resolve()?;
            ensure_within_span(&cfg, yes)?;
            let partition = Partition::new(cfg.range()?);
            if json {
                let report = SubsetReport {
                    lower: cfg.lower,
                    upper: cfg.upper,
                    bit_width: partition.range().bit_width(),
                    subsets: partition.subsets(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_subsets(&partition);
            }
        }
        Some(Commands::Reconstruct {
            lower,
            upper,
            answers,
        }) => {
            let answers = answer::parse_answer_list(&answers)?;
            let index = match upper {
                Some(upper) => core::reconstruct_in(IndexRange::new(lower, upper)?, &answers)?,
                None => lower
                    .checked_add_unsigned(core::partition::decode_offset(&answers)?)
                    .ok_or(core::PartitionError::Overflow)?,
            };
            println!("{index}");
        }
        Some(Commands::Guess { range, yes }) => {
            let cfg = range.resolve()?;
            let stdin = io::stdin();
            let mut console = ConsoleAnswers::new(stdin.lock(), io::stdout());

            if cfg.exceeds_max_span() && !yes {
                println!("Warning: very wide range. This can generate large subsets.");
                if !console.confirm("Continue anyway? (yes/no): ")? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let session = core::Session::from_config(&cfg)?;
            println!("Think of an integer index between {} and {}.", cfg.lower, cfg.upper);
            println!("Answer 'yes' or 'no' to each question about subset membership.");
            println!();
            print_subsets(session.partition());
            io::stdout().flush()?;

            let outcome = session.run(&mut console)?;
            println!();
            println!("Got it! Your index is {}.", outcome.guess);
        }
        Some(Commands::Simulate {
            range,
            secret,
            json,
            yes,
        }) => {
            let cfg = range.resolve()?;
            ensure_within_span(&cfg, yes)?;
            ensure!(
                IndexRange::new(cfg.lower, cfg.upper)?.contains(secret),
                "secret {} lies outside [{}, {}]",
                secret,
                cfg.lower,
                cfg.upper
            );
            let session = core::Session::from_config(&cfg)?;
            let mut oracle = OracleAnswers::new(secret);
            let outcome: Outcome = session.run(&mut oracle)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for (i, answer) in outcome.answers.iter().enumerate() {
                    println!("Subset {}: {}", i + 1, answer::format_answer(*answer));
                }
                println!("Guess: {}", outcome.guess);
            }
            if outcome.guess != oracle.secret() {
                return Err(anyhow!(
                    "oracle session guessed {} instead of {}",
                    outcome.guess,
                    oracle.secret()
                ));
            }
        }
        None => {
            println!("subsift {} ready", core::version());
            println!("Try: `subsift guess --lower 1 --upper 100` or `subsift subsets --lower 1 --upper 8`");
        }
    }
    Ok(())
}
