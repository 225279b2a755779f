//! Primitive layer builder.

use std::collections::HashSet;

use crate::config::{Category, TokenConfig};
use crate::resolve::{classify, PrimitivePathMap, ResolutionContext, Resolver};
use crate::types::{token_path, Export, Token, Variable};
use crate::validation::ValidationResult;

use super::{emit, Artifact, ArtifactKind};

/// Primitive trees plus the path map later layers reference.
#[derive(Debug, Clone)]
pub struct PrimitiveOutput {
    /// One artifact per category, in [`Category::ALL`] order. Categories
    /// without tokens are present but empty.
    pub artifacts: Vec<Artifact>,
    pub paths: PrimitivePathMap,
    pub diagnostics: ValidationResult,
}

impl PrimitiveOutput {
    pub fn artifact(&self, category: Category) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.kind == ArtifactKind::Primitive(category))
    }
}

/// Builds fully resolved primitive tokens.
pub struct PrimitiveBuilder<'a> {
    export: &'a Export,
    config: &'a TokenConfig,
    resolver: Resolver<'a>,
}

impl<'a> PrimitiveBuilder<'a> {
    pub fn new(export: &'a Export, config: &'a TokenConfig, resolver: Resolver<'a>) -> Self {
        Self {
            export,
            config,
            resolver,
        }
    }

    /// Walk the primitive collections in export order.
    ///
    /// Each variable uses its first mode with a value, and aliases are
    /// followed to literals: primitives never hold references. Paths are
    /// recorded as tokens are emitted.
    pub fn build(&self) -> PrimitiveOutput {
        let mut artifacts: Vec<Artifact> = Category::ALL
            .iter()
            .map(|c| Artifact::new(None, ArtifactKind::Primitive(*c)))
            .collect();
        let mut paths = PrimitivePathMap::new();
        let mut diagnostics = ValidationResult::new();

        let primitive_collections = self.config.primitive_collections();
        let wanted: HashSet<&str> = primitive_collections.iter().map(|(id, _)| *id).collect();
        let context = ResolutionContext::new();

        for collection in self.export.collections.iter().filter(|c| wanted.contains(c.id.as_str())) {
            let Some(base) = primitive_collections
                .iter()
                .find(|(id, _)| *id == collection.id)
                .map(|(_, category)| *category)
            else {
                continue;
            };

            for variable in &collection.variables {
                let category = category_for(variable, base);
                let path = token_path(&variable.name);
                let resolution = self.resolver.resolve_literal(&variable.id, &context);
                let kind = classify(&path, resolution.resolved.as_ref(), resolution.kind);
                let token = Token::new(resolution.value)
                    .with_kind(kind)
                    .with_description(variable.description());

                let Some(artifact) = artifacts
                    .iter_mut()
                    .find(|a| a.kind == ArtifactKind::Primitive(category))
                else {
                    continue;
                };

                if emit(artifact, &path, token, variable, &mut diagnostics) {
                    paths.insert(variable.id.clone(), path);
                }
            }
        }

        PrimitiveOutput {
            artifacts,
            paths,
            diagnostics,
        }
    }
}

/// Radius and shadow primitives live in size/colour collections upstream
/// but get their own trees.
fn category_for(variable: &Variable, base: Category) -> Category {
    let name = variable.name.to_lowercase();
    if name.contains("radius") {
        Category::Radius
    } else if name.contains("shadow") {
        Category::Shadows
    } else {
        base
    }
}
