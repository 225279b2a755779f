//! Token layer builders.
//!
//! Builds the three token layers from an export, strictly bottom-up:
//!
//! 1. Primitives - fully resolved literals, plus the primitive path map
//! 2. Semantic - per brand and mode, referencing primitives
//! 3. Components - per brand and bucket, referencing semantic tokens
//!
//! The semantic and component builders take the finished
//! [`PrimitiveOutput`], so they can never observe a partial path map.
//!
//! # Example
//!
//! ```ignore
//! use strata::layers::build;
//!
//! let output = build(&export, &TokenConfig::default());
//! for artifact in output.artifacts() {
//!     println!("{}: {} tokens", artifact.label(), artifact.tree.len());
//! }
//! ```

mod artifact;
mod component;
mod primitive;
mod semantic;

pub use artifact::{Artifact, ArtifactKind, LayerKind};
pub use component::ComponentBuilder;
pub use primitive::{PrimitiveBuilder, PrimitiveOutput};
pub use semantic::SemanticBuilder;

use crate::config::TokenConfig;
use crate::index::VariableIndex;
use crate::resolve::{PrimitivePathMap, Resolver};
use crate::types::{Export, Sentinel, Token, TokenPath, Variable};
use crate::validation::{Diagnostic, ValidationResult};

/// Every artifact of one build, plus the diagnostics raised while building.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub primitives: Vec<Artifact>,
    pub primitive_paths: PrimitivePathMap,
    pub semantic: Vec<Artifact>,
    pub components: Vec<Artifact>,
    pub diagnostics: ValidationResult,
}

impl BuildOutput {
    /// All artifacts, primitives first.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.primitives
            .iter()
            .chain(&self.semantic)
            .chain(&self.components)
    }

    /// Find an artifact by label (e.g. `bild/colors-light`).
    pub fn artifact(&self, label: &str) -> Option<&Artifact> {
        self.artifacts().find(|a| a.label() == label)
    }

    /// Brand slugs in build order.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for brand in self.semantic.iter().chain(&self.components).filter_map(|a| a.brand.as_deref()) {
            if !brands.contains(&brand) {
                brands.push(brand);
            }
        }
        brands
    }

    /// Total number of tokens across all artifacts.
    pub fn token_count(&self) -> usize {
        self.artifacts().map(|a| a.tree.len()).sum()
    }
}

/// Build all layers for an export.
pub fn build(export: &Export, config: &TokenConfig) -> BuildOutput {
    let index = VariableIndex::build(export);
    let resolver = Resolver::new(&index, &config.collections);

    let primitives = PrimitiveBuilder::new(export, config, resolver).build();
    let semantic = SemanticBuilder::new(export, config, resolver).build(&primitives);
    let components = ComponentBuilder::new(export, config, resolver).build(&primitives);

    let mut diagnostics = primitives.diagnostics;
    diagnostics.merge(semantic.diagnostics);
    diagnostics.merge(components.diagnostics);

    BuildOutput {
        primitives: primitives.artifacts,
        primitive_paths: primitives.paths,
        semantic: semantic.artifacts,
        components: components.artifacts,
        diagnostics,
    }
}

/// Artifacts of one brand-scoped layer.
#[derive(Debug, Clone, Default)]
pub struct LayerOutput {
    pub artifacts: Vec<Artifact>,
    pub diagnostics: ValidationResult,
}

/// Insert a token into an artifact, recording sentinel and path conflicts.
///
/// Returns whether the token was added.
pub(crate) fn emit(
    artifact: &mut Artifact,
    path: &TokenPath,
    token: Token,
    variable: &Variable,
    diagnostics: &mut ValidationResult,
) -> bool {
    let label = artifact.label();

    if path.is_empty() {
        diagnostics.push(
            Diagnostic::warning(
                "strata::build::empty-path",
                format!("variable '{}' ({}) has no usable name segments", variable.name, variable.id),
            )
            .in_artifact(label)
            .with_help("Private segments starting with '_' are dropped from token paths"),
        );
        return false;
    }

    if let Some(sentinel) = token.value.sentinel() {
        diagnostics.push(sentinel_diagnostic(sentinel, path, variable).in_artifact(label.clone()));
    }

    match artifact.tree.insert(path, token) {
        Ok(()) => true,
        Err(conflict) => {
            diagnostics.push(
                Diagnostic::warning(
                    "strata::build::duplicate-path",
                    format!("{} (from '{}'); the first token is kept", conflict, variable.name),
                )
                .in_artifact(label),
            );
            false
        }
    }
}

fn sentinel_diagnostic(sentinel: &Sentinel, path: &TokenPath, variable: &Variable) -> Diagnostic {
    let code = format!("strata::resolve::{}", sentinel.code());
    match sentinel {
        Sentinel::Unresolved { id } => Diagnostic::warning(
            code,
            format!("'{}' ({}) aliases unknown variable '{}'", path, variable.name, id),
        )
        .with_help("The alias target is missing from the export"),
        Sentinel::Circular { chain } => Diagnostic::warning(
            code,
            format!("'{}' ({}) has a circular alias: {}", path, variable.name, chain.join(" -> ")),
        )
        .with_help("Break the cycle by pointing one variable at a literal value"),
        Sentinel::NoValue { id } => Diagnostic::warning(
            code,
            format!("'{}' ({}): variable '{}' has no value in any mode", path, variable.name, id),
        ),
    }
}
