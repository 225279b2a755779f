//! Swift constants, one `enum` namespace per artifact.

use std::fmt::Write;

use crate::layers::Artifact;
use crate::types::{Literal, Token, TokenValue};

use super::{comment_text, quoted, type_name, ReferenceTable, GENERATED};

pub fn render(artifact: &Artifact, refs: &ReferenceTable<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// {}", GENERATED);
    let _ = writeln!(out);
    let _ = writeln!(out, "import Foundation");
    let _ = writeln!(out);
    let _ = writeln!(out, "public enum {} {{", type_name(artifact));

    for (path, token) in artifact.tree.leaves() {
        if let Some(comment) = comment_text(token) {
            let _ = writeln!(out, "    /// {}", comment);
        }
        let _ = writeln!(
            out,
            "    public static let {} = {}",
            path.camel_case(),
            value(token, refs)
        );
    }

    out.push_str("}\n");
    out
}

fn value(token: &Token, refs: &ReferenceTable<'_>) -> String {
    match &token.value {
        TokenValue::Reference(path) => match refs.owner(path) {
            Some(owner) => format!("{}.{}", type_name(owner), path.camel_case()),
            None => quoted(&token.value.to_string()),
        },
        TokenValue::Sentinel(sentinel) => quoted(&sentinel.to_string()),
        TokenValue::Literal(Literal::Text(s)) => quoted(s),
        // Keep a fraction so Swift infers Double
        TokenValue::Literal(Literal::Number(n)) if n.fract() == 0.0 => format!("{:.1}", n),
        TokenValue::Literal(literal) => literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_build;

    #[test]
    fn test_enum_namespace() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, None);
        let swift = render(&build.primitives[1], &refs);

        insta::assert_snapshot!(swift, @r###"
        // Generated by strata. Do not edit.

        import Foundation

        public enum PrimitivesSpacing {
            public static let space4 = 16.0
        }
        "###);
    }

    #[test]
    fn test_references_use_defining_type() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, Some("bild"));

        let light = render(&build.semantic[0], &refs);
        assert!(light.contains("public enum BildColorsLight {"));
        assert!(light.contains("public static let semanticBrandPrimary = PrimitivesColors.colorRed500"));
        assert!(light.contains("public static let semanticBroken = \"UNRESOLVED(VariableID:9:9)\""));

        let button = render(&build.components[0], &refs);
        assert!(button.contains("public static let buttonBackground = BildColorsLight.semanticBrandPrimary"));
        assert!(button.contains("public static let buttonFontWeight = 700"));
    }
}
