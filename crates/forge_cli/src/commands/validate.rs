//! Validate command - Validate a spec document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use forge_gen::preflight;
use forge_spec::{SpecReader, SpecValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the spec document (YAML or JSON)
    #[arg(short, long)]
    spec: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating spec document {:?}", args.spec);

    let spec = SpecReader::read_module(&args.spec)?;

    let mut all_passed = true;

    println!("📋 Validating specification...");
    let result = SpecValidator::validate_module(&spec);
    if result.valid {
        println!("   ✅ Structural validation passed");
    } else {
        all_passed = false;
        println!("   ❌ Structural validation failed:");
        for error in &result.errors {
            println!("      - {}", error);
        }
    }
    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    println!("🏭 Checking generation preconditions...");
    match preflight(&spec) {
        Ok(()) => println!("   ✅ Generation preflight passed"),
        Err(e) => {
            all_passed = false;
            println!("   ❌ {}", e);
        }
    }

    println!();
    if all_passed {
        println!("✅ All validations passed!");
    } else {
        println!("❌ Some validations failed. Please fix the issues above.");
        std::process::exit(crate::ExitCodes::VALIDATION_FAILURE as i32);
    }

    Ok(())
}
