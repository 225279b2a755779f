//! Semantic layer builder.

use crate::config::{BrandConfig, PublicBreakpoint, TokenConfig};
use crate::resolve::{classify, Layer, ResolutionContext, Resolver};
use crate::types::{normalize_segment, semantic_path, Export, Token};
use crate::validation::ValidationResult;

use super::{emit, Artifact, ArtifactKind, LayerOutput, PrimitiveOutput};

/// Builds semantic tokens per brand and output axis.
pub struct SemanticBuilder<'a> {
    export: &'a Export,
    config: &'a TokenConfig,
    resolver: Resolver<'a>,
}

impl<'a> SemanticBuilder<'a> {
    pub fn new(export: &'a Export, config: &'a TokenConfig, resolver: Resolver<'a>) -> Self {
        Self {
            export,
            config,
            resolver,
        }
    }

    /// For every brand: colour mode x {light, dark}, breakpoint x {mobile,
    /// tablet, desktop}, and density x each declared density mode.
    ///
    /// Brands without a colour mapping mode get no colour artifacts.
    pub fn build(&self, primitives: &PrimitiveOutput) -> LayerOutput {
        let mut output = LayerOutput::default();
        let ids = &self.config.collections;

        for brand in &self.config.brands {
            if brand.color_mode.is_some() {
                for (name, mode) in self.config.color_modes.modes() {
                    let context = ResolutionContext::new().with_brand(brand).with_color_mode(mode);
                    let kind = ArtifactKind::ColorMode(name.to_string());
                    output.artifacts.push(self.artifact(
                        brand,
                        kind,
                        &ids.color_mode,
                        &context,
                        primitives,
                        &mut output.diagnostics,
                    ));
                }
            }

            for breakpoint in PublicBreakpoint::ALL {
                let Some(mode) = self.config.breakpoint_mode(breakpoint) else {
                    continue;
                };
                let context = ResolutionContext::new().with_brand(brand).with_breakpoint(mode);
                output.artifacts.push(self.artifact(
                    brand,
                    ArtifactKind::Breakpoint(breakpoint),
                    &ids.breakpoints,
                    &context,
                    primitives,
                    &mut output.diagnostics,
                ));
            }

            if let Some(density) = self.export.collection(&ids.density) {
                for mode in &density.modes {
                    let context = ResolutionContext::new()
                        .with_brand(brand)
                        .with_density(&mode.mode_id);
                    output.artifacts.push(self.artifact(
                        brand,
                        ArtifactKind::Density(normalize_segment(&mode.name)),
                        &ids.density,
                        &context,
                        primitives,
                        &mut output.diagnostics,
                    ));
                }
            }
        }

        output
    }

    /// Resolve every variable of one collection into an artifact.
    fn artifact(
        &self,
        brand: &BrandConfig,
        kind: ArtifactKind,
        collection_id: &str,
        context: &ResolutionContext<'_>,
        primitives: &PrimitiveOutput,
        diagnostics: &mut ValidationResult,
    ) -> Artifact {
        let mut artifact = Artifact::new(Some(brand.slug()), kind);

        let Some(collection) = self.export.collection(collection_id) else {
            return artifact;
        };

        for variable in &collection.variables {
            let path = semantic_path(&variable.name);
            let resolution =
                self.resolver
                    .resolve_variable(&variable.id, context, &primitives.paths, Layer::Semantic);
            let kind = classify(&path, resolution.resolved.as_ref(), resolution.kind);
            let token = Token::new(resolution.value)
                .with_kind(kind)
                .with_description(variable.description());

            emit(&mut artifact, &path, token, variable, diagnostics);
        }

        artifact
    }
}
