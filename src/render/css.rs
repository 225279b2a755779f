//! CSS custom properties.

use std::fmt::Write;

use crate::layers::{Artifact, ArtifactKind};
use crate::types::{Literal, Token, TokenKind, TokenPath, TokenValue};

use super::{comment_text, GENERATED};

pub fn render(artifact: &Artifact) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* {} */", GENERATED);
    let _ = writeln!(out, "/* {} */", artifact.label());
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {{", selector(artifact));

    for (path, token) in artifact.tree.leaves() {
        if let Some(comment) = comment_text(token) {
            let _ = writeln!(out, "  /* {} */", comment);
        }
        let _ = writeln!(out, "  {}: {};", variable_name(&path), value(token));
    }

    out.push_str("}\n");
    out
}

/// `--color-red-500`
pub fn variable_name(path: &TokenPath) -> String {
    format!("--{}", path.join("-"))
}

/// Scope selector: `:root` for primitives, brand and axis attributes
/// otherwise.
fn selector(artifact: &Artifact) -> String {
    let Some(brand) = &artifact.brand else {
        return ":root".to_string();
    };
    let brand = format!("[data-brand=\"{}\"]", brand);
    match &artifact.kind {
        ArtifactKind::ColorMode(mode) => format!("{}[data-theme=\"{}\"]", brand, mode),
        ArtifactKind::Breakpoint(bp) => format!("{}[data-breakpoint=\"{}\"]", brand, bp.name()),
        ArtifactKind::Density(mode) => format!("{}[data-density=\"{}\"]", brand, mode),
        ArtifactKind::Component(_) | ArtifactKind::Primitive(_) => brand,
    }
}

fn value(token: &Token) -> String {
    match &token.value {
        TokenValue::Reference(path) => format!("var({})", variable_name(path)),
        TokenValue::Sentinel(sentinel) => format!("\"{}\"", sentinel),
        TokenValue::Literal(Literal::Number(n)) if token.kind == Some(TokenKind::Dimension) => {
            format!("{}px", n)
        }
        TokenValue::Literal(Literal::Integer(i)) if token.kind == Some(TokenKind::Dimension) => {
            format!("{}px", i)
        }
        TokenValue::Literal(literal) => literal.to_string(),
    }
}

/// Per-brand entry point importing every file the brand uses.
pub fn bundle(imports: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* {} */", GENERATED);
    let _ = writeln!(out);
    for import in imports {
        let _ = writeln!(out, "@import \"{}\";", import);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_build;

    #[test]
    fn test_primitives_in_root() {
        let build = sample_build();
        let css = render(&build.primitives[0]);

        insta::assert_snapshot!(css, @r###"
        /* Generated by strata. Do not edit. */
        /* primitives/colors */

        :root {
          /* Signal red */
          --color-red-500: #dd0000;
          --color-black-alpha-50: rgba(0, 0, 0, 0.5);
        }
        "###);
    }

    #[test]
    fn test_semantic_selector_and_references() {
        let build = sample_build();
        let css = render(&build.semantic[0]);

        assert!(css.contains("[data-brand=\"bild\"][data-theme=\"light\"] {"));
        assert!(css.contains("  --semantic-brand-primary: var(--color-red-500);"));
        assert!(css.contains("  --semantic-broken: \"UNRESOLVED(VariableID:9:9)\";"));
    }

    #[test]
    fn test_dimension_units() {
        let build = sample_build();
        assert!(render(&build.primitives[1]).contains("--space-4: 16px;"));

        let mobile = render(&build.semantic[1]);
        assert!(mobile.contains("[data-breakpoint=\"mobile\"]"));
        assert!(mobile.contains("--semantic-line-height-body: 1.4;"));
    }

    #[test]
    fn test_component_scope() {
        let build = sample_build();
        let css = render(&build.components[0]);

        assert!(css.contains("[data-brand=\"bild\"] {"));
        assert!(css.contains("--button-background: var(--semantic-brand-primary);"));
        assert!(css.contains("--button-font-weight: 700;"));
    }

    #[test]
    fn test_bundle_imports() {
        let css = bundle(&["../../primitives/colors.css".into(), "semantic/colors-light.css".into()]);
        assert!(css.ends_with(
            "@import \"../../primitives/colors.css\";\n@import \"semantic/colors-light.css\";\n"
        ));
    }
}
