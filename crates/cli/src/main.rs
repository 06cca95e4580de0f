use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wrapbypass_corelib as core;
use wrapbypass_corelib::{BoundPolicy, ChallengeError, ChallengeReport, Config};

#[derive(Parser)]
#[command(
    name = "wrapbypass",
    version,
    about = "Upper-bound-only check followed by a silent u16 narrowing"
)]
struct Cli {
    /// Also reject values that do not fit in u16
    #[arg(long, global = true)]
    strict: bool,

    /// Write the challenge run as JSON to this path (not valid with `solve`)
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an input that answers each question correctly
    Solve,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_report(path: &Path, report: &ChallengeReport) -> Result<()> {
    let json = report.to_json_pretty().context("serializing report")?;
    fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if cli.report.is_some() && matches!(cli.command, Some(Commands::Solve)) {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--report only applies to a challenge run, not to `solve`",
            )
            .exit();
    }
    init_logging();

    let policy = if cli.strict {
        BoundPolicy::Strict
    } else {
        BoundPolicy::UpperOnly
    };
    let config = Config::new(policy);
    tracing::debug!(version = core::version(), ?policy, "starting");

    match cli.command {
        Some(Commands::Solve) => {
            for (label, input) in core::solve(&config) {
                match input {
                    Some(v) => println!("Answer {label} input: {v}"),
                    None => println!("Answer {label} input: unreachable"),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            let outcome = core::run_challenge(&config, stdin.lock(), &mut stdout);
            stdout.flush()?;

            match outcome {
                Ok(report) => {
                    if let Some(path) = &cli.report {
                        write_report(path, &report)?;
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(ChallengeError::Input {
                    failure, report, ..
                }) => {
                    if let Some(path) = &cli.report {
                        write_report(path, &report)?;
                    }
                    Ok(ExitCode::from(failure.exit_code()))
                }
                Err(e @ ChallengeError::Io(_)) => Err(e.into()),
            }
        }
    }
}
