//! Generate command - Generate a module from a spec document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use forge_gen::{Generator, ScriptOptions};
use forge_spec::{SpecReader, SpecValidator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the spec document (YAML or JSON)
    #[arg(short, long)]
    spec: PathBuf,

    /// Output directory (defaults to the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Addons path the provisioning script targets on the remote host
    #[arg(long, default_value = forge_gen::policy::DEFAULT_ADDONS_PATH)]
    addons_path: String,

    /// Emit only the provisioning script, no module tree
    #[arg(long, conflicts_with = "no_script")]
    script_only: bool,

    /// Emit only the module tree, no provisioning script
    #[arg(long)]
    no_script: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    info!("Generating module from {:?}", args.spec);

    let spec = SpecReader::read_module(&args.spec)?;

    // Surface what generation will silently drop.
    let validation = SpecValidator::validate_module(&spec);
    for warning in &validation.warnings {
        println!("⚠️  {}", warning);
    }

    let output = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let generator = Generator::new(spec)
        .with_script_options(ScriptOptions::default().with_addons_path(&args.addons_path));

    let generated = if args.script_only {
        generator.generate_script(&output)
    } else if args.no_script {
        generator.generate_tree(&output)
    } else {
        generator.generate(&output)
    }
    .context("Failed to generate module")?;

    println!("✅ Module generated successfully!");
    println!();
    if let Some(module_root) = &generated.module_root {
        println!("Module tree: {:?}", module_root);
    }
    if let Some(script_path) = &generated.script_path {
        println!("Provisioning script: {:?}", script_path);
        println!();
        println!("Next steps:");
        println!("  # Copy the script to the target host and run it:");
        println!("  bash {}", script_path.display());
    }

    Ok(())
}
