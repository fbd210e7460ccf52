//! `fixgen` CLI entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use fixgen::config::FixtureConfig;
use fixgen::exit_codes;
use fixgen::generate::{GenerateOptions, generate};
use fixgen::logging;
use fixgen::verify::verify_dir;

#[derive(Parser)]
#[command(
    name = "fixgen",
    version,
    about = "Generate and verify sort test fixtures"
)]
struct Cli {
    /// Defaults to `generate` in the current directory.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a random sample and write `input.txt` plus its sorted `expected.txt`.
    Generate {
        /// Directory receiving the artifacts.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that `expected.txt` is the sorted `input.txt`.
    Verify {
        /// Case directory holding both artifacts.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // clap's own exit code would collide with `MISMATCH`.
            eprint!("{err}");
            return Ok(exit_codes::INVALID);
        }
    };
    let cfg = FixtureConfig::default();
    match cli.command.unwrap_or(Command::Generate {
        dir: PathBuf::from("."),
        seed: None,
    }) {
        Command::Generate { dir, seed } => {
            let outcome = generate(&cfg, &GenerateOptions { dir, seed })?;
            println!("{}", outcome.summary());
            Ok(exit_codes::OK)
        }
        Command::Verify { dir, json } => {
            let report = verify_dir(&cfg, &dir)?;
            if json {
                print!("{}", report.to_json()?);
            } else {
                for line in report.lines() {
                    println!("{line}");
                }
            }
            Ok(if report.valid {
                exit_codes::OK
            } else {
                exit_codes::MISMATCH
            })
        }
    }
}
