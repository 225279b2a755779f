//! strata - Design token layering for multi-brand design systems
//!
//! Turns a design tool's variable export into three layers of design
//! tokens: fully resolved primitives, per-brand semantic tokens that
//! reference primitives, and per-brand component tokens that reference
//! either. The layers are rendered as CSS, JS, JSON, Android, and Swift.

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod layers;
pub mod output;
pub mod parser;
pub mod render;
pub mod resolve;
pub mod types;
pub mod validation;

pub use config::{BrandConfig, Manifest, TokenConfig};
pub use error::{Result, StrataError};
pub use index::VariableIndex;
pub use layers::{build, Artifact, ArtifactKind, BuildOutput};
pub use parser::{load_export, parse_export};
pub use render::{render, write_build, Format, ReferenceTable};
pub use resolve::{Resolver, ResolutionContext};
pub use types::{
    Collection, Export, Literal, ModeValue, Sentinel, Token, TokenKind, TokenPath, TokenTree,
    TokenValue, Variable,
};
pub use validation::{validate_build, Diagnostic, Severity, ValidationResult};
