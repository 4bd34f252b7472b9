//! release-notes - release notes links for Swift package dependency updates
//!
//! Runs `swift package update --dry-run` (or reads a captured log) and lists
//! where the release notes of every dependency that would change can be found.

use clap::Parser;
use release_notes::cli::CliArgs;
use release_notes::error::AppError;
use release_notes::orchestrator::Orchestrator;
use release_notes::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("release-notes v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Package: {}", args.path.display());
        match args.input_source() {
            Some(_) if args.reads_stdin() => eprintln!("Input: <stdin>"),
            Some(path) => eprintln!("Input: {}", path.display()),
            None => eprintln!("Input: {} package update --dry-run", args.swift.display()),
        }
    }

    let orchestrator = Orchestrator::new(args.clone());
    let result = match orchestrator.run().await {
        Ok(result) => result,
        Err(AppError::Parse(e)) => {
            // Dump what was captured so the unexpected log can be inspected
            if args.verbose {
                if let Some(output) = e.output() {
                    eprintln!("Captured output:");
                    eprintln!("{}", output);
                }
            }
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if !args.quiet {
        for warning in &result.warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    let output_config = OutputConfig::from_cli(
        args.json,
        args.markdown,
        args.verbose,
        args.quiet,
        args.no_color,
    );
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
