//! Project manifest (strata.yaml) parsing.
//!
//! The manifest defines the input export, the output directory, the formats
//! to emit, and the identifier tables for the token layers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StrataError, Result};
use crate::render::Format;

use super::tokens::TokenConfig;

/// Project manifest loaded from strata.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Variable export to read.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Output directory for generated files.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Formats to emit. Defaults to all formats.
    #[serde(default = "default_formats")]
    pub formats: Vec<Format>,

    /// Collection, brand, mode, and bucket identifiers.
    #[serde(default)]
    pub tokens: TokenConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from("tokens.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_formats() -> Vec<Format> {
    Format::ALL.to_vec()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            formats: default_formats(),
            tokens: TokenConfig::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a strata.yaml file.
    ///
    /// Relative `input` and `output` paths are resolved against the
    /// manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StrataError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = Self::parse(&content)?;
        if let Some(root) = path.parent() {
            manifest.rebase(root);
        }
        Ok(manifest)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| StrataError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check strata.yaml syntax".to_string()),
        })?;

        manifest.tokens.validate()?;
        Ok(manifest)
    }

    /// Render the manifest as YAML, for `strata init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| StrataError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    fn rebase(&mut self, root: &Path) {
        if self.input.is_relative() {
            self.input = root.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = root.join(&self.output);
        }
    }
}
