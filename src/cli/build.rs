//! Build command implementation.
//!
//! Reads the variable export, builds the three token layers, validates them,
//! and writes every format to the output directory.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StrataError};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_build, Format};
use crate::validation::{print_diagnostics, validate_build};

use super::{build_layers, load_manifest};

/// Build token files from a variable export
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest to use (default: ./strata.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Variable export JSON (overrides the manifest)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Formats to emit (overrides the manifest)
    #[arg(long = "format", short, value_enum, value_delimiter = ',')]
    pub formats: Vec<Format>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut manifest = load_manifest(args.config.as_deref(), printer)?;
    if let Some(input) = args.input {
        manifest.input = input;
    }
    if let Some(output) = args.output {
        manifest.output = output;
    }
    if !args.formats.is_empty() {
        manifest.formats = args.formats;
    }

    let output = build_layers(&manifest, printer)?;

    let result = validate_build(&output);
    if !result.is_ok() {
        print_diagnostics(&result, printer);
    }
    if result.has_errors() {
        return Err(StrataError::Build {
            message: format!(
                "{} found, nothing written",
                plural(result.error_count(), "error", "errors")
            ),
            help: Some("Run `strata validate` for the full report".to_string()),
        });
    }

    let summary = write_build(&output, &manifest.formats, &manifest.output)?;
    let formats: Vec<&str> = manifest.formats.iter().map(|f| f.name()).collect();

    printer.success(
        "Finished",
        &format!(
            "{} to {} {}",
            plural(summary.files.len(), "file", "files"),
            printer.cyan(&display_path(&manifest.output)),
            printer.dim(&format!("({})", formats.join(", ")))
        ),
    );

    Ok(())
}
