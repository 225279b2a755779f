//! Build configuration.
//!
//! A project is configured by a `strata.yaml` manifest. Without one the
//! built-in defaults apply: `tokens.json` in, `dist/` out, every format,
//! and the production collection and mode identifiers.

mod manifest;
mod tokens;

pub use manifest::Manifest;
pub use tokens::{
    BrandConfig, BreakpointConfig, BucketConfig, Category, CollectionIds, ColorModes,
    PublicBreakpoint, TokenConfig, GENERAL_BUCKET,
};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "strata.yaml";
