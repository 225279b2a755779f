pub mod build;
pub mod completions;
pub mod init;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::Result;
use crate::layers::{self, BuildOutput};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_export;

/// strata - Design token layering for multi-brand design systems
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build token files from a variable export
    Build(build::BuildArgs),

    /// Initialize a strata project (generates strata.yaml)
    Init(init::InitArgs),

    /// Resolve and check tokens without writing output
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the manifest from `--config`, else `./strata.yaml`, else defaults.
pub(crate) fn load_manifest(config: Option<&Path>, printer: &Printer) -> Result<Manifest> {
    let path = match config {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(MANIFEST_FILENAME)).filter(|p| p.is_file()),
    };

    match path {
        Some(path) => {
            printer.status("Loading", &display_path(&path));
            Manifest::load(&path)
        }
        None => Ok(Manifest::default()),
    }
}

/// Read the export and build every layer.
pub(crate) fn build_layers(manifest: &Manifest, printer: &Printer) -> Result<BuildOutput> {
    printer.status("Reading", &display_path(&manifest.input));
    let export = load_export(&manifest.input)?;

    let output = layers::build(&export, &manifest.tokens);
    for (layer, artifacts) in [
        ("primitives", &output.primitives),
        ("semantic", &output.semantic),
        ("components", &output.components),
    ] {
        let tokens: usize = artifacts.iter().map(|a| a.tree.len()).sum();
        let files = artifacts.iter().filter(|a| !a.is_empty()).count();
        printer.status(
            "Resolved",
            &format!(
                "{} {}",
                layer,
                printer.dim(&format!(
                    "({} in {})",
                    plural(tokens, "token", "tokens"),
                    plural(files, "artifact", "artifacts")
                ))
            ),
        );
    }

    Ok(output)
}
