//! # cedula CLI
//!
//! Validates, formats and computes check digits of national identity numbers.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use cedula_check::{
    compute_check_digit, format_input, normalize, CedulaValidator, Presentation,
    ValidationVerdict, Validator,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "cedula", version, about = "Validate national identity numbers (cédula)")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers such as 001-1234567-3. Reads one per line from stdin when none is given.
    Validate { ids: Vec<String> },
    /// Format raw input as DDD-DDDDDDD-D, the way it is done while typing.
    Format { raw: String },
    /// Compute the check digit of a 10 digit payload.
    CheckDigit { payload: String },
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    input: &'a str,
    verdict: ValidationVerdict,
    #[serde(flatten)]
    presentation: Presentation,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Validate { ids } => {
            let validator = CedulaValidator::default();
            let mut all_valid = true;
            if ids.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line.context("failed to read stdin")?;
                    all_valid &= report(&validator, &line, cli.json, &mut stdout)?;
                }
            } else {
                for id in &ids {
                    all_valid &= report(&validator, id, cli.json, &mut stdout)?;
                }
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Format { raw } => {
            let formatted = format_input(&raw);
            if cli.json {
                serde_json::to_writer(&mut stdout, &serde_json::json!({ "formatted": formatted }))?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{}", formatted)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::CheckDigit { payload } => {
            let Some(check_digit) = compute_check_digit(&normalize(&payload)) else {
                bail!("payload must be exactly 10 digits, got {:?}", payload);
            };
            if cli.json {
                serde_json::to_writer(
                    &mut stdout,
                    &serde_json::json!({ "payload": payload, "check_digit": check_digit }),
                )?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{}", check_digit)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validate one identifier and print the result. Returns whether it was valid.
fn report(
    validator: &CedulaValidator,
    input: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let verdict = validator.validate(input);
    tracing::debug!(input, ?verdict, "validated identifier");

    let presentation = Presentation::from(verdict);
    if json {
        serde_json::to_writer(
            &mut *out,
            &ValidationOutput {
                input,
                verdict,
                presentation,
            },
        )?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}: {}", input, presentation.message)?;
    }
    Ok(verdict.is_valid())
}
