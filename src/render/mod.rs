//! Output formats for built token trees.
//!
//! Each renderer turns one [`Artifact`] into the text of one file. References
//! are rewritten into the format's native reference syntax through a
//! [`ReferenceTable`], which knows which artifact defines every path a brand
//! can see. [`write_build`] lays the rendered files out on disk.

mod android;
mod css;
mod js;
mod json;
mod swift;
mod writer;

pub use writer::{artifact_path, write_build, WriteSummary};

use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::layers::{Artifact, BuildOutput, LayerKind};
use crate::types::{Token, TokenPath, TokenValue};

/// A target output format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Css,
    Js,
    Json,
    Android,
    Swift,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Css,
        Format::Js,
        Format::Json,
        Format::Android,
        Format::Swift,
    ];

    /// Directory name under the output root.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Js => "js",
            Format::Json => "json",
            Format::Android => "android",
            Format::Swift => "swift",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Js => "js",
            Format::Json => "json",
            Format::Android => "xml",
            Format::Swift => "swift",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which artifact defines each path visible to one brand.
///
/// Primitives are registered first, then the brand's semantic artifacts in
/// build order. The first definition of a path wins.
#[derive(Debug, Default)]
pub struct ReferenceTable<'a> {
    owners: HashMap<TokenPath, &'a Artifact>,
}

impl<'a> ReferenceTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for artifacts of `brand` (or for primitives when `None`).
    pub fn for_brand(build: &'a BuildOutput, brand: Option<&str>) -> Self {
        let mut table = Self::new();
        for artifact in &build.primitives {
            table.register(artifact);
        }
        if let Some(brand) = brand {
            for artifact in build.semantic.iter().filter(|a| a.brand.as_deref() == Some(brand)) {
                table.register(artifact);
            }
        }
        table
    }

    pub fn register(&mut self, artifact: &'a Artifact) {
        for (path, _) in artifact.tree.leaves() {
            self.owners.entry(path).or_insert(artifact);
        }
    }

    /// The artifact defining `path`.
    pub fn owner(&self, path: &TokenPath) -> Option<&'a Artifact> {
        self.owners.get(path).copied()
    }
}

/// Render one artifact in `format`.
pub fn render(format: Format, artifact: &Artifact, refs: &ReferenceTable<'_>) -> String {
    match format {
        Format::Css => css::render(artifact),
        Format::Js => js::render(artifact, refs),
        Format::Json => json::render(artifact),
        Format::Android => android::render(artifact, refs),
        Format::Swift => swift::render(artifact, refs),
    }
}

/// Header line content for generated files.
const GENERATED: &str = "Generated by strata. Do not edit.";

/// PascalCase type name for an artifact: `PrimitivesColors`,
/// `BildColorsLight`, `BildComponentsButton`.
pub(crate) fn type_name(artifact: &Artifact) -> String {
    let mut words: Vec<String> = Vec::new();
    match (&artifact.brand, artifact.layer()) {
        (None, layer) => words.push(layer.dir().to_string()),
        (Some(brand), LayerKind::Component) => {
            words.push(brand.clone());
            words.push(LayerKind::Component.dir().to_string());
        }
        (Some(brand), _) => words.push(brand.clone()),
    }
    words.push(artifact.name());

    let camel = TokenPath::new(words).camel_case();
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// lowerCamelCase module binding for an artifact, used by the JS renderer.
pub(crate) fn module_name(artifact: &Artifact) -> String {
    let type_name = type_name(artifact);
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => type_name,
    }
}

/// Relative path from the directory of `from` to `to`, with `/` separators.
pub(crate) fn relative_path(from: &Path, to: &Path) -> String {
    let from_dir: Vec<Component<'_>> = from
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_dir
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from_dir.len() {
        parts.push("..".to_string());
    }
    for part in &to_parts[common..] {
        parts.push(part.as_os_str().to_string_lossy().into_owned());
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Double-quoted string literal with `\` and `"` escaped. Valid in JS and
/// Swift for the values tokens hold.
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Description text made safe for a single-line comment.
pub(crate) fn comment_text(token: &Token) -> Option<String> {
    token
        .description
        .as_deref()
        .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" ").replace("*/", "* /"))
}

/// The referenced path and its defining artifact, if the value is a
/// reference that the table can place.
pub(crate) fn reference_owner<'a>(
    value: &'a TokenValue,
    refs: &ReferenceTable<'a>,
) -> Option<(&'a TokenPath, &'a Artifact)> {
    let path = value.reference()?;
    Some((path, refs.owner(path)?))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{Category, PublicBreakpoint};
    use crate::layers::ArtifactKind;
    use crate::resolve::PrimitivePathMap;
    use crate::types::{Literal, Sentinel, TokenKind};
    use crate::validation::ValidationResult;

    pub(crate) fn token(value: impl Into<TokenValue>, kind: Option<TokenKind>) -> Token {
        Token::new(value).with_kind(kind)
    }

    pub(crate) fn reference(path: &str) -> TokenValue {
        TokenValue::Reference(TokenPath::parse(path))
    }

    /// A small build: two primitive categories, one semantic colour mode,
    /// one breakpoint, one component bucket.
    pub(crate) fn sample_build() -> BuildOutput {
        let mut colors = Artifact::new(None, ArtifactKind::Primitive(Category::Colors));
        colors
            .tree
            .insert(
                &TokenPath::parse("color.red.500"),
                token(Literal::text("#dd0000"), Some(TokenKind::Color)).with_description(Some("Signal red")),
            )
            .unwrap();
        colors
            .tree
            .insert(
                &TokenPath::parse("color.black.alpha-50"),
                token(Literal::text("rgba(0, 0, 0, 0.5)"), Some(TokenKind::Color)),
            )
            .unwrap();

        let mut spacing = Artifact::new(None, ArtifactKind::Primitive(Category::Spacing));
        spacing
            .tree
            .insert(&TokenPath::parse("space.4"), token(Literal::Number(16.0), Some(TokenKind::Dimension)))
            .unwrap();

        let mut light = Artifact::new(Some("bild".into()), ArtifactKind::ColorMode("light".into()));
        light
            .tree
            .insert(
                &TokenPath::parse("semantic.brand.primary"),
                token(reference("color.red.500"), Some(TokenKind::Color)),
            )
            .unwrap();
        light
            .tree
            .insert(
                &TokenPath::parse("semantic.broken"),
                token(Sentinel::Unresolved { id: "VariableID:9:9".into() }, None),
            )
            .unwrap();

        let mut mobile = Artifact::new(Some("bild".into()), ArtifactKind::Breakpoint(PublicBreakpoint::Mobile));
        mobile
            .tree
            .insert(
                &TokenPath::parse("semantic.spacing.gap"),
                token(reference("space.4"), Some(TokenKind::Dimension)),
            )
            .unwrap();
        mobile
            .tree
            .insert(
                &TokenPath::parse("semantic.line-height.body"),
                token(Literal::Number(1.4), Some(TokenKind::Number)),
            )
            .unwrap();

        let mut button = Artifact::new(Some("bild".into()), ArtifactKind::Component("button".into()));
        button
            .tree
            .insert(
                &TokenPath::parse("button.background"),
                token(reference("semantic.brand.primary"), Some(TokenKind::Color)),
            )
            .unwrap();
        button
            .tree
            .insert(
                &TokenPath::parse("button.font-weight"),
                token(Literal::Integer(700), Some(TokenKind::FontWeight)),
            )
            .unwrap();

        BuildOutput {
            primitives: vec![colors, spacing],
            primitive_paths: PrimitivePathMap::new(),
            semantic: vec![light, mobile],
            components: vec![button],
            diagnostics: ValidationResult::new(),
        }
    }

    #[test]
    fn test_reference_table_owners() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, Some("bild"));

        let owner = refs.owner(&TokenPath::parse("color.red.500")).unwrap();
        assert_eq!(owner.label(), "primitives/colors");
        let owner = refs.owner(&TokenPath::parse("semantic.brand.primary")).unwrap();
        assert_eq!(owner.label(), "bild/colors-light");

        let other = ReferenceTable::for_brand(&build, Some("sportbild"));
        assert!(other.owner(&TokenPath::parse("semantic.brand.primary")).is_none());
    }

    #[test]
    fn test_type_and_module_names() {
        let build = sample_build();
        assert_eq!(type_name(&build.primitives[0]), "PrimitivesColors");
        assert_eq!(type_name(&build.semantic[0]), "BildColorsLight");
        assert_eq!(type_name(&build.components[0]), "BildComponentsButton");
        assert_eq!(module_name(&build.semantic[1]), "bildSpacingMobile");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(
                Path::new("brands/bild/semantic/colors-light.js"),
                Path::new("primitives/colors.js")
            ),
            "../../../primitives/colors.js"
        );
        assert_eq!(
            relative_path(
                Path::new("brands/bild/components/button.js"),
                Path::new("brands/bild/semantic/colors-light.js")
            ),
            "../semantic/colors-light.js"
        );
        assert_eq!(
            relative_path(Path::new("primitives/index.js"), Path::new("primitives/colors.js")),
            "./colors.js"
        );
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted(r#"say "hi""#), r#""say \"hi\"""#);
    }

    #[test]
    fn test_format_serde_names() {
        let formats: Vec<Format> = serde_yaml::from_str("[css, android]").unwrap();
        assert_eq!(formats, vec![Format::Css, Format::Android]);
        assert_eq!(Format::Android.extension(), "xml");
    }
}
