//! Validation checks over a finished build.
//!
//! Each check takes a `&BuildOutput` and returns a `ValidationResult`.

use std::collections::HashSet;

use crate::layers::{Artifact, BuildOutput, LayerKind};
use crate::types::TokenPath;

use super::warning::{Diagnostic, ValidationResult};

/// Primitives must hold literals only.
pub fn check_primitive_references(build: &BuildOutput) -> ValidationResult {
    let mut result = ValidationResult::new();

    for artifact in &build.primitives {
        for (path, token) in artifact.tree.leaves() {
            if let Some(target) = token.value.reference() {
                result.push(
                    Diagnostic::error(
                        "strata::validate::primitive-reference",
                        format!("primitive '{}' references '{}'", path, target),
                    )
                    .in_artifact(artifact.label())
                    .with_help("Primitive aliases must be followed to a literal value"),
                );
            }
        }
    }

    result
}

/// Every reference must point into a layer the artifact may depend on.
///
/// Semantic artifacts may reference primitives. Component artifacts may
/// reference primitives and their own brand's semantic tokens.
pub fn check_dangling_references(build: &BuildOutput) -> ValidationResult {
    let mut result = ValidationResult::new();

    let primitives = defined_paths(build.primitives.iter());

    for artifact in &build.semantic {
        check_artifact(artifact, &[&primitives], &mut result);
    }

    for artifact in &build.components {
        let semantic = defined_paths(
            build
                .semantic
                .iter()
                .filter(|s| s.brand == artifact.brand),
        );
        check_artifact(artifact, &[&primitives, &semantic], &mut result);
    }

    result
}

fn check_artifact(
    artifact: &Artifact,
    visible: &[&HashSet<TokenPath>],
    result: &mut ValidationResult,
) {
    for (path, token) in artifact.tree.leaves() {
        let Some(target) = token.value.reference() else {
            continue;
        };
        if visible.iter().any(|paths| paths.contains(target)) {
            continue;
        }

        let help = match artifact.layer() {
            LayerKind::Component => {
                "No primitive or semantic token of this brand has that path"
            }
            _ => "No primitive token has that path",
        };
        result.push(
            Diagnostic::warning(
                "strata::validate::dangling-reference",
                format!("'{}' references undefined token '{}'", path, target),
            )
            .in_artifact(artifact.label())
            .with_help(help),
        );
    }
}

fn defined_paths<'a>(artifacts: impl Iterator<Item = &'a Artifact>) -> HashSet<TokenPath> {
    artifacts
        .flat_map(|a| a.tree.leaves().into_iter().map(|(path, _)| path))
        .collect()
}
