//! AddonForge CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Generation error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const GENERATION_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("forge=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Generate(args) => commands::generate::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<forge_gen::GenError>().is_some() {
        return ExitCodes::GENERATION_ERROR;
    }
    if let Some(spec_error) = e.downcast_ref::<forge_spec::SpecError>() {
        return match spec_error {
            forge_spec::SpecError::NotFound(_) | forge_spec::SpecError::UnsupportedFormat(_) => {
                ExitCodes::INVALID_ARGS
            }
            _ => ExitCodes::VALIDATION_FAILURE,
        };
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("validation") {
        ExitCodes::VALIDATION_FAILURE
    } else if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
