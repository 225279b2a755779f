//! Init command implementation.
//!
//! Writes a `strata.yaml` manifest holding the built-in defaults, ready to
//! be edited for another design system.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, StrataError};
use crate::output::{display_path, plural, Printer};

/// Initialize a strata project by generating a strata.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing strata.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(StrataError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::default();
    let yaml = format!(
        "# strata project manifest\n# Relative paths are resolved against this file.\n\n{}",
        manifest.to_yaml()?
    );

    fs::create_dir_all(&args.path).map_err(|e| StrataError::Io {
        path: args.path.clone(),
        message: format!("Failed to create project directory: {}", e),
    })?;
    fs::write(&manifest_path, yaml).map_err(|e| StrataError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write {}: {}", MANIFEST_FILENAME, e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} {}",
            display_path(&manifest_path),
            printer.dim(&format!(
                "({}, {})",
                plural(manifest.tokens.brands.len(), "brand", "brands"),
                plural(manifest.formats.len(), "format", "formats")
            ))
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet() -> Printer {
        Printer::new().with_quiet(true)
    }

    #[test]
    fn test_init_writes_loadable_manifest() {
        let dir = TempDir::new().unwrap();
        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &quiet(),
        )
        .unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.input, dir.path().join("tokens.json"));
        assert_eq!(manifest.tokens.brands.len(), 3);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: mine\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(matches!(run(args, &quiet()), Err(StrataError::Build { .. })));

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &quiet()).unwrap();
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("tokens.json"));
    }
}
