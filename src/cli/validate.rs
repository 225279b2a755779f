//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StrataError};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_build};

use super::{build_layers, load_manifest};

/// Resolve and check tokens without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest to use (default: ./strata.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Variable export JSON (overrides the manifest)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut manifest = load_manifest(args.config.as_deref(), printer)?;
    if let Some(input) = args.input {
        manifest.input = input;
    }

    let output = build_layers(&manifest, printer)?;
    let result = validate_build(&output);
    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && result.has_warnings()) {
        return Err(StrataError::Build {
            message: format!(
                "validation failed with {}",
                plural(result.len(), "diagnostic", "diagnostics")
            ),
            help: if args.strict && !result.has_errors() {
                Some("Warnings are errors with --strict".to_string())
            } else {
                None
            },
        });
    }

    Ok(())
}
