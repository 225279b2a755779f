//! Output artifacts: one token tree per file to emit.

use std::fmt;

use crate::config::{Category, PublicBreakpoint};
use crate::types::TokenTree;

/// The layer an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Primitive,
    Semantic,
    Component,
}

impl LayerKind {
    /// Directory name for this layer.
    pub fn dir(&self) -> &'static str {
        match self {
            LayerKind::Primitive => "primitives",
            LayerKind::Semantic => "semantic",
            LayerKind::Component => "components",
        }
    }
}

/// What an artifact holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Primitive(Category),
    /// Colour mode name (`light` or `dark`).
    ColorMode(String),
    Breakpoint(PublicBreakpoint),
    /// Density mode name, normalized.
    Density(String),
    /// Component bucket name.
    Component(String),
}

impl ArtifactKind {
    pub fn layer(&self) -> LayerKind {
        match self {
            ArtifactKind::Primitive(_) => LayerKind::Primitive,
            ArtifactKind::ColorMode(_) | ArtifactKind::Breakpoint(_) | ArtifactKind::Density(_) => {
                LayerKind::Semantic
            }
            ArtifactKind::Component(_) => LayerKind::Component,
        }
    }

    /// File stem, e.g. `colors`, `colors-light`, `spacing-mobile`,
    /// `density-compact`, `button`.
    pub fn name(&self) -> String {
        match self {
            ArtifactKind::Primitive(category) => category.name().to_string(),
            ArtifactKind::ColorMode(mode) => format!("colors-{}", mode),
            ArtifactKind::Breakpoint(bp) => format!("spacing-{}", bp.name()),
            ArtifactKind::Density(mode) => format!("density-{}", mode),
            ArtifactKind::Component(bucket) => bucket.clone(),
        }
    }
}

/// A token tree destined for one output file per format.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Brand slug; primitives are shared across brands.
    pub brand: Option<String>,
    pub kind: ArtifactKind,
    pub tree: TokenTree,
}

impl Artifact {
    pub fn new(brand: Option<String>, kind: ArtifactKind) -> Self {
        Self {
            brand,
            kind,
            tree: TokenTree::new(),
        }
    }

    pub fn layer(&self) -> LayerKind {
        self.kind.layer()
    }

    pub fn name(&self) -> String {
        self.kind.name()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Stable label: `primitives/colors`, `bild/colors-light`,
    /// `bild/components/button`.
    pub fn label(&self) -> String {
        match (&self.brand, self.layer()) {
            (None, layer) => format!("{}/{}", layer.dir(), self.name()),
            (Some(brand), LayerKind::Component) => {
                format!("{}/{}/{}", brand, LayerKind::Component.dir(), self.name())
            }
            (Some(brand), _) => format!("{}/{}", brand, self.name()),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_names() {
        assert_eq!(ArtifactKind::Primitive(Category::Colors).name(), "colors");
        assert_eq!(ArtifactKind::ColorMode("dark".into()).name(), "colors-dark");
        assert_eq!(
            ArtifactKind::Breakpoint(PublicBreakpoint::Tablet).name(),
            "spacing-tablet"
        );
        assert_eq!(ArtifactKind::Density("compact".into()).name(), "density-compact");
    }

    #[test]
    fn test_labels() {
        let primitive = Artifact::new(None, ArtifactKind::Primitive(Category::Spacing));
        assert_eq!(primitive.label(), "primitives/spacing");

        let semantic = Artifact::new(Some("bild".into()), ArtifactKind::ColorMode("light".into()));
        assert_eq!(semantic.label(), "bild/colors-light");

        let component = Artifact::new(Some("bild".into()), ArtifactKind::Component("button".into()));
        assert_eq!(component.label(), "bild/components/button");
        assert_eq!(component.layer(), LayerKind::Component);
    }
}
