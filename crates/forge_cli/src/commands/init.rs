//! Init command - Write a starter spec document.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use forge_spec::{FieldKind, FieldSpec, ModelSpec, ModuleSpecBuilder};

#[derive(Args)]
pub struct InitArgs {
    /// Module name to seed the document with
    #[arg(short, long, default_value = "library_mgmt")]
    name: String,

    /// Where to write the document (defaults to ./<name>.yaml)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn execute(args: InitArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.yaml", args.name)));

    if output.exists() {
        anyhow::bail!("Spec document already exists: {:?}", output);
    }

    info!("Writing starter spec to {:?}", output);

    let mut builder = ModuleSpecBuilder::new(&args.name);
    builder.version("1.0").category("Tools").add_model(
        ModelSpec::new("library.book")
            .with_field(FieldSpec::new("title", FieldKind::ShortText).required())
            .with_field(FieldSpec::new("pages", FieldKind::Integer).with_bounds(0, 2000))
            .with_field(
                FieldSpec::new("state", FieldKind::Selection)
                    .with_option("available", "Available")
                    .with_option("lent", "Lent out"),
            ),
    );
    let spec = builder.build();

    let document = serde_yaml::to_string(&spec).context("Failed to serialize starter spec")?;
    fs::write(&output, document)
        .with_context(|| format!("Failed to write spec document {:?}", output))?;

    println!("✅ Starter spec written to {:?}", output);
    println!();
    println!("Next steps:");
    println!("  # Edit the models and fields, then:");
    println!("  forge validate --spec {}", output.display());
    println!("  forge generate --spec {}", output.display());

    Ok(())
}
