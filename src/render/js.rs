//! ES module constants.
//!
//! Every token becomes `export const camelCasePath = value;`. References
//! import the defining artifact's module as a namespace.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::layers::Artifact;
use crate::types::{Literal, Token, TokenPath, TokenValue};

use super::{
    artifact_path, comment_text, module_name, quoted, reference_owner, relative_path, Format,
    ReferenceTable, GENERATED,
};

pub fn render(artifact: &Artifact, refs: &ReferenceTable<'_>) -> String {
    let here = artifact_path(artifact, Format::Js);
    let leaves = artifact.tree.leaves();

    // Module binding -> import path, sorted for stable output
    let mut imports: BTreeMap<String, String> = BTreeMap::new();
    for (_, token) in &leaves {
        if let Some((_, owner)) = reference_owner(&token.value, refs) {
            if owner.label() != artifact.label() {
                let target = artifact_path(owner, Format::Js);
                imports.insert(module_name(owner), relative_path(&here, &target));
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "// {}", GENERATED);
    if !imports.is_empty() {
        let _ = writeln!(out);
        for (name, path) in &imports {
            let _ = writeln!(out, "import * as {} from {};", name, quoted(path));
        }
    }
    let _ = writeln!(out);

    for (path, token) in &leaves {
        if let Some(comment) = comment_text(token) {
            let _ = writeln!(out, "/** {} */", comment);
        }
        let _ = writeln!(
            out,
            "export const {} = {};",
            path.camel_case(),
            value(token, artifact, refs)
        );
    }
    out
}

fn value(token: &Token, artifact: &Artifact, refs: &ReferenceTable<'_>) -> String {
    match &token.value {
        TokenValue::Reference(path) => match refs.owner(path) {
            Some(owner) if owner.label() == artifact.label() => path.camel_case(),
            Some(owner) => format!("{}.{}", module_name(owner), path.camel_case()),
            // Dangling reference, kept visible in the output
            None => quoted(&token.value.to_string()),
        },
        TokenValue::Sentinel(sentinel) => quoted(&sentinel.to_string()),
        TokenValue::Literal(Literal::Text(s)) => quoted(s),
        TokenValue::Literal(literal) => literal.to_string(),
    }
}

/// `primitives/index.js`: re-export each primitive module under its
/// category name.
pub fn primitives_index(artifacts: &[&Artifact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// {}", GENERATED);
    let _ = writeln!(out);
    for artifact in artifacts {
        let name = artifact.name();
        let _ = writeln!(
            out,
            "export * as {} from {};",
            TokenPath::new(vec![name.clone()]).camel_case(),
            quoted(&format!("./{}.js", name))
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_build;

    #[test]
    fn test_primitive_constants() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, None);
        let js = render(&build.primitives[0], &refs);

        insta::assert_snapshot!(js, @r###"
        // Generated by strata. Do not edit.

        /** Signal red */
        export const colorRed500 = "#dd0000";
        export const colorBlackAlpha50 = "rgba(0, 0, 0, 0.5)";
        "###);
    }

    #[test]
    fn test_semantic_imports_primitives() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, Some("bild"));
        let js = render(&build.semantic[0], &refs);

        assert!(js.contains("import * as primitivesColors from \"../../../primitives/colors.js\";"));
        assert!(js.contains("export const semanticBrandPrimary = primitivesColors.colorRed500;"));
        assert!(js.contains("export const semanticBroken = \"UNRESOLVED(VariableID:9:9)\";"));
    }

    #[test]
    fn test_component_imports_semantic() {
        let build = sample_build();
        let refs = ReferenceTable::for_brand(&build, Some("bild"));
        let js = render(&build.components[0], &refs);

        assert!(js.contains("import * as bildColorsLight from \"../semantic/colors-light.js\";"));
        assert!(js.contains("export const buttonBackground = bildColorsLight.semanticBrandPrimary;"));
        assert!(js.contains("export const buttonFontWeight = 700;"));
    }

    #[test]
    fn test_dangling_reference_is_quoted() {
        let build = sample_build();
        let refs = ReferenceTable::new();
        let js = render(&build.semantic[1], &refs);

        assert!(js.contains("export const semanticSpacingGap = \"{space.4}\";"));
        assert!(js.contains("export const semanticLineHeightBody = 1.4;"));
    }

    #[test]
    fn test_primitives_index() {
        let build = sample_build();
        let artifacts: Vec<&Artifact> = build.primitives.iter().collect();

        assert!(primitives_index(&artifacts)
            .contains("export * as spacing from \"./spacing.js\";"));
    }
}
