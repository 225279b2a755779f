//! End-to-end tests over a realistic variable export.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use strata::cli::build::{run, BuildArgs};
use strata::output::Printer;
use strata::{
    build, load_export, validate_build, write_build, BuildOutput, Export, Format, Literal,
    TokenConfig, TokenKind, TokenPath, TokenValue,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("export.json")
}

fn export() -> Export {
    load_export(&fixture()).unwrap()
}

fn value(output: &BuildOutput, label: &str, path: &str) -> String {
    output
        .artifact(label)
        .unwrap_or_else(|| panic!("missing artifact {}", label))
        .tree
        .get(&TokenPath::parse(path))
        .unwrap_or_else(|| panic!("missing {} in {}", path, label))
        .value
        .to_string()
}

#[test]
fn test_end_to_end_scenario() {
    let output = build(&export(), &TokenConfig::default());

    assert_eq!(value(&output, "primitives/colors", "color.red.500"), "#dd0000");
    assert_eq!(
        value(&output, "bild/colors-light", "semantic.brand.primary"),
        "{color.red.500}"
    );
}

#[test]
fn test_primitives() {
    let output = build(&export(), &TokenConfig::default());

    assert_eq!(value(&output, "primitives/colors", "color.overlay.50"), "rgba(0, 0, 0, 0.5)");
    assert_eq!(value(&output, "primitives/colors", "color.old-red"), "#dd0000");
    assert_eq!(value(&output, "primitives/shadows", "shadow.soft"), "rgba(0, 0, 0, 0.25)");
    assert_eq!(value(&output, "primitives/radius", "border-radius.sm"), "4");

    let typography = &output.artifact("primitives/typography").unwrap().tree;
    let bold = typography.get(&TokenPath::parse("font.fontweight.bold")).unwrap();
    assert_eq!(bold.value, TokenValue::Literal(Literal::Integer(700)));
    assert_eq!(bold.kind, Some(TokenKind::FontWeight));

    let body = typography.get(&TokenPath::parse("font.lineheight.body")).unwrap();
    assert_eq!(body.kind, Some(TokenKind::Number));

    let family = typography.get(&TokenPath::parse("font.family.primary")).unwrap();
    assert_eq!(family.kind, None);
}

#[test]
fn test_semantic_axes() {
    let output = build(&export(), &TokenConfig::default());

    // Dark primary goes through the brand colour mapping, which is not a
    // primitive, so it resolves to each brand's literal
    assert_eq!(value(&output, "bild/colors-dark", "semantic.brand.primary"), "#dd0000");
    assert_eq!(value(&output, "sportbild/colors-dark", "semantic.brand.primary"), "#000000");

    assert_eq!(value(&output, "bild/spacing-mobile", "semantic.spacing.section"), "{space.2}");
    assert_eq!(value(&output, "bild/spacing-tablet", "semantic.spacing.section"), "{space.4}");
    assert_eq!(value(&output, "bild/spacing-desktop", "semantic.spacing.section"), "{space.6}");

    // Tablet has no value: fall back to the first declared mode with one
    assert_eq!(value(&output, "bild/spacing-tablet", "semantic.typography.line-height"), "1.2");

    assert_eq!(value(&output, "bild/density-compact", "semantic.density.stack-gap"), "{space.2}");
    assert_eq!(value(&output, "bild/density-spacious", "semantic.density.stack-gap"), "{space.6}");

    assert!(output.artifact("advertorial/colors-light").is_none());
    assert!(output.artifact("advertorial/spacing-mobile").is_some());
}

#[test]
fn test_components() {
    let output = build(&export(), &TokenConfig::default());

    assert_eq!(value(&output, "bild/components/button", "button.padding"), "{space.4}");
    assert_eq!(value(&output, "sportbild/components/button", "button.padding"), "{space.6}");
    assert_eq!(value(&output, "advertorial/components/button", "button.padding"), "12");

    assert_eq!(
        value(&output, "bild/components/button", "button.background"),
        "{semantic.brand.primary}"
    );
    assert_eq!(value(&output, "bild/components/card", "card.radius"), "{border-radius.sm}");
    assert_eq!(
        value(&output, "bild/components/card", "card.shadow"),
        "UNRESOLVED(VariableID:9999:1)"
    );
    assert_eq!(value(&output, "bild/components/general", "badge.label"), "NEW");
    assert_eq!(value(&output, "sportbild/components/general", "brand.primary"), "{color.neutral.1000}");

    assert!(output.artifact("bild/components/input").is_none());
}

#[test]
fn test_layering_invariant() {
    let output = build(&export(), &TokenConfig::default());

    for artifact in &output.primitives {
        for (path, token) in artifact.tree.leaves() {
            assert!(token.value.reference().is_none(), "{} holds a reference", path);
        }
    }

    let primitive_paths: Vec<TokenPath> = output
        .primitives
        .iter()
        .flat_map(|a| a.tree.leaves().into_iter().map(|(p, _)| p))
        .collect();
    for artifact in &output.semantic {
        for (path, token) in artifact.tree.leaves() {
            if let Some(target) = token.value.reference() {
                assert!(primitive_paths.contains(target), "{} -> {}", path, target);
            }
        }
    }
}

#[test]
fn test_diagnostics() {
    let output = build(&export(), &TokenConfig::default());
    let result = validate_build(&output);

    assert!(!result.has_errors());
    // Two looping variables, two colour modes, two brands with colour modes
    assert_eq!(result.with_code("strata::resolve::circular-alias").count(), 8);
    // Card/Shadow, once per brand
    assert_eq!(result.with_code("strata::resolve::unresolved-alias").count(), 3);
    assert_eq!(result.with_code("strata::validate::dangling-reference").count(), 0);
}

#[test]
fn test_cycle_chain_is_reported() {
    let output = build(&export(), &TokenConfig::default());

    assert_eq!(
        value(&output, "bild/colors-light", "semantic.loop.a"),
        "CIRCULAR(VariableID:588:3 -> VariableID:588:4 -> VariableID:588:3)"
    );
}

#[test]
fn test_output_is_deterministic() {
    let export = export();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = write_build(&build(&export, &TokenConfig::default()), &Format::ALL, first.path()).unwrap();
    let b = write_build(&build(&export, &TokenConfig::default()), &Format::ALL, second.path()).unwrap();

    assert_eq!(a.files.len(), b.files.len());
    for (left, right) in a.files.iter().zip(&b.files) {
        assert_eq!(
            left.strip_prefix(first.path()).unwrap(),
            right.strip_prefix(second.path()).unwrap()
        );
        assert_eq!(fs::read_to_string(left).unwrap(), fs::read_to_string(right).unwrap());
    }
}

#[test]
fn test_build_command_writes_all_formats() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("dist");

    run(
        BuildArgs {
            config: None,
            input: Some(fixture()),
            output: Some(out.clone()),
            formats: vec![],
        },
        &Printer::new().with_quiet(true),
    )
    .unwrap();

    let css = fs::read_to_string(out.join("css/brands/bild/semantic/colors-light.css")).unwrap();
    assert!(css.contains("--semantic-brand-primary: var(--color-red-500);"));

    let json = fs::read_to_string(out.join("json/primitives/colors.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["color"]["red"]["500"]["value"], "#dd0000");

    let swift = fs::read_to_string(out.join("swift/brands/bild/components/button.swift")).unwrap();
    assert!(swift.contains("public static let buttonBackground = BildColorsLight.semanticBrandPrimary"));

    assert!(out.join("android/primitives/typography.xml").is_file());
    assert!(out.join("js/primitives/index.js").is_file());
    // Advertorial has no colour modes
    assert!(!out.join("css/brands/advertorial/semantic/colors-light.css").exists());
}
