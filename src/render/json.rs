//! Nested JSON trees, with references kept as `{a.b.c}`.

use crate::layers::Artifact;

pub fn render(artifact: &Artifact) -> String {
    // A tree of strings, numbers, and bools always serializes
    let mut out = serde_json::to_string_pretty(&artifact.tree).unwrap_or_default();
    out.push('\n');
    out
}
