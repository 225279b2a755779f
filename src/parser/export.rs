//! Variable export parsing.
//!
//! Reads the JSON document produced by the design tool's variable export
//! into an [`Export`]. Only the shape needed for resolution is checked.

use std::path::Path;

use crate::error::{StrataError, Result};
use crate::types::Export;

/// Parse an export document from a JSON string.
pub fn parse_export(source: &str) -> Result<Export> {
    serde_json::from_str(source).map_err(|e| StrataError::Parse {
        message: format!("Invalid variable export: {}", e),
        help: Some(
            "Expected a JSON object with a `collections` array of {id, name, modes, variables}"
                .to_string(),
        ),
    })
}

/// Read and parse an export document from disk.
pub fn load_export(path: &Path) -> Result<Export> {
    let source = std::fs::read_to_string(path).map_err(|e| StrataError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read variable export: {}", e),
    })?;

    parse_export(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ModeValue, RawLiteral, ResolvedKind, RgbaColor};

    const EXPORT: &str = r#"{
        "collections": [
            {
                "id": "VariableCollectionId:1:1",
                "name": "Color Primitive",
                "modes": [{ "modeId": "1:0", "name": "Value" }],
                "variables": [
                    {
                        "id": "VariableID:1:2",
                        "name": "Color/Red/500",
                        "resolvedType": "COLOR",
                        "description": "Signal red",
                        "valuesByMode": { "1:0": { "r": 0.867, "g": 0, "b": 0, "a": 1 } }
                    },
                    {
                        "id": "VariableID:1:3",
                        "name": "Color/Brand",
                        "resolvedType": "COLOR",
                        "valuesByMode": { "1:0": { "type": "VARIABLE_ALIAS", "id": "VariableID:1:2" } }
                    },
                    {
                        "id": "VariableID:1:4",
                        "name": "Font/Weight/Bold",
                        "resolvedType": "FLOAT",
                        "valuesByMode": { "1:0": "700px", "1:1": 700, "1:2": null }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_export_collections() {
        let export = parse_export(EXPORT).unwrap();
        assert_eq!(export.collections.len(), 1);

        let collection = &export.collections[0];
        assert_eq!(collection.name, "Color Primitive");
        assert_eq!(collection.modes[0].mode_id, "1:0");
        assert_eq!(collection.variables.len(), 3);
    }

    #[test]
    fn test_parse_color_literal() {
        let export = parse_export(EXPORT).unwrap();
        let red = &export.collections[0].variables[0];

        assert_eq!(red.resolved_kind, ResolvedKind::Color);
        assert_eq!(red.description(), Some("Signal red"));
        assert_eq!(
            red.values_by_mode["1:0"],
            Some(ModeValue::Literal(RawLiteral::Color(RgbaColor::new(
                0.867, 0.0, 0.0, 1.0
            ))))
        );
    }

    #[test]
    fn test_parse_alias() {
        let export = parse_export(EXPORT).unwrap();
        let brand = &export.collections[0].variables[1];
        assert_eq!(
            brand.values_by_mode["1:0"],
            Some(ModeValue::alias("VariableID:1:2"))
        );
    }

    #[test]
    fn test_parse_mixed_literals_keep_mode_order() {
        let export = parse_export(EXPORT).unwrap();
        let weight = &export.collections[0].variables[2];

        let modes: Vec<&str> = weight.values_by_mode.keys().map(|k| k.as_str()).collect();
        assert_eq!(modes, vec!["1:0", "1:1", "1:2"]);
        assert_eq!(weight.values_by_mode["1:0"], Some(ModeValue::text("700px")));
        assert_eq!(weight.values_by_mode["1:1"], Some(ModeValue::number(700.0)));
        assert_eq!(weight.values_by_mode["1:2"], None);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let source = r#"{"collections":[{"id":"c","name":"C","variables":[
            {"id":"v","name":"X","resolvedType":"COLOR","valuesByMode":{"m":{"r":1,"g":1,"b":1}}}
        ]}]}"#;
        let export = parse_export(source).unwrap();
        assert_eq!(
            export.collections[0].variables[0].values_by_mode["m"],
            Some(ModeValue::color(1.0, 1.0, 1.0, 1.0))
        );
    }

    #[test]
    fn test_malformed_export_is_parse_error() {
        let err = parse_export("{ not json").unwrap_err();
        assert!(matches!(err, StrataError::Parse { .. }));

        let err = parse_export(r#"{"collections": [{"name": "missing id"}]}"#).unwrap_err();
        assert!(matches!(err, StrataError::Parse { .. }));
    }

    #[test]
    fn test_unknown_resolved_type_is_parse_error() {
        let source = r#"{"collections":[{"id":"c","name":"C","variables":[
            {"id":"v","name":"X","resolvedType":"GRADIENT","valuesByMode":{}}
        ]}]}"#;
        assert!(parse_export(source).is_err());
    }
}
