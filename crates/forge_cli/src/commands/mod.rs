//! CLI command definitions.
//!
//! This module defines the command structure for the AddonForge CLI.
//! Each subcommand maps to one step of the spec-to-module workflow.

use clap::{Parser, Subcommand};

pub mod generate;
pub mod init;
pub mod validate;

/// AddonForge - declarative Odoo addon-module generator
#[derive(Parser)]
#[command(name = "forge")]
#[command(version, about = "AddonForge - declarative Odoo addon-module generator")]
#[command(long_about = r#"
AddonForge turns a declarative module specification (a YAML or JSON
document describing models, fields and validation bounds) into a complete
Odoo addon module and a portable provisioning script.

WORKFLOWS:
  init      → Write a starter spec document to build on
  validate  → Check a spec document and report what generation would drop
  generate  → Generate the module tree and/or the provisioning script

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Generation error

For more information, visit: https://github.com/addonforge/addonforge
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter spec document
    Init(init::InitArgs),

    /// Validate a spec document
    Validate(validate::ValidateArgs),

    /// Generate a module from a spec document
    Generate(generate::GenerateArgs),
}
