//! Component layer builder.

use indexmap::IndexMap;

use crate::config::{BrandConfig, TokenConfig, GENERAL_BUCKET};
use crate::resolve::{classify, Layer, ResolutionContext, Resolver};
use crate::types::{token_path, Export, Token};
use crate::validation::ValidationResult;

use super::{emit, Artifact, ArtifactKind, LayerOutput, PrimitiveOutput};

/// Builds component tokens per brand, grouped into buckets.
pub struct ComponentBuilder<'a> {
    export: &'a Export,
    config: &'a TokenConfig,
    resolver: Resolver<'a>,
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(export: &'a Export, config: &'a TokenConfig, resolver: Resolver<'a>) -> Self {
        Self {
            export,
            config,
            resolver,
        }
    }

    /// Walk the brand token mapping, then the brand colour mapping, under
    /// each brand's modes.
    pub fn build(&self, primitives: &PrimitiveOutput) -> LayerOutput {
        let mut output = LayerOutput::default();
        for brand in &self.config.brands {
            let artifacts = self.brand(brand, primitives, &mut output.diagnostics);
            output.artifacts.extend(artifacts);
        }
        output
    }

    fn brand(
        &self,
        brand: &BrandConfig,
        primitives: &PrimitiveOutput,
        diagnostics: &mut ValidationResult,
    ) -> Vec<Artifact> {
        let ids = &self.config.collections;
        let context = ResolutionContext::new().with_brand(brand);
        let slug = brand.slug();

        // Bucket name -> artifact, created on first token
        let mut buckets: IndexMap<&str, Artifact> = IndexMap::new();

        let collections = [ids.brand_tokens.as_str(), ids.brand_colors.as_str()]
            .into_iter()
            .filter_map(|id| self.export.collection(id));

        for collection in collections {
            for variable in &collection.variables {
                let bucket = self.config.bucket_for(&variable.name);
                let path = token_path(&variable.name);
                let resolution = self.resolver.resolve_variable(
                    &variable.id,
                    &context,
                    &primitives.paths,
                    Layer::Component,
                );
                let kind = classify(&path, resolution.resolved.as_ref(), resolution.kind);
                let token = Token::new(resolution.value)
                    .with_kind(kind)
                    .with_description(variable.description());

                let artifact = buckets.entry(bucket).or_insert_with(|| {
                    Artifact::new(Some(slug.clone()), ArtifactKind::Component(bucket.to_string()))
                });
                emit(artifact, &path, token, variable, diagnostics);
            }
        }

        // Configured bucket order, general last
        let order: Vec<&str> = self
            .config
            .buckets
            .iter()
            .map(|b| b.name.as_str())
            .chain(std::iter::once(GENERAL_BUCKET))
            .collect();
        let mut artifacts: Vec<Artifact> = Vec::new();
        for name in order {
            if let Some(artifact) = buckets.shift_remove(name) {
                if !artifact.is_empty() {
                    artifacts.push(artifact);
                }
            }
        }
        artifacts
    }
}
