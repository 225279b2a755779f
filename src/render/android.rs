//! Android value resources.
//!
//! Colours become `<color>`, dimensions `<dimen>` in `dp`, font weights and
//! whole numbers `<integer>`, and everything else `<string>`. Resource names
//! are the path joined with `_`.

use std::fmt::Write;

use crate::layers::Artifact;
use crate::types::{Literal, Token, TokenKind, TokenPath, TokenValue};

use super::{comment_text, ReferenceTable, GENERATED};

/// Android resource type for a token.
fn resource_type(token: &Token) -> &'static str {
    match (&token.value, token.kind) {
        (TokenValue::Sentinel(_), _) => "string",
        (_, Some(TokenKind::Color)) => "color",
        (_, Some(TokenKind::Dimension)) => "dimen",
        (_, Some(TokenKind::FontWeight)) => "integer",
        (TokenValue::Literal(Literal::Integer(_)), _) => "integer",
        (TokenValue::Literal(Literal::Number(n)), _) if n.fract() == 0.0 => "integer",
        _ => "string",
    }
}

pub fn resource_name(path: &TokenPath) -> String {
    path.join("_").replace('-', "_")
}

pub fn render(artifact: &Artifact, refs: &ReferenceTable<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<?xml version=\"1.0\" encoding=\"utf-8\"?>");
    let _ = writeln!(out, "<!-- {} -->", GENERATED);
    let _ = writeln!(out, "<!-- {} -->", artifact.label());
    let _ = writeln!(out, "<resources>");

    for (path, token) in artifact.tree.leaves() {
        if let Some(comment) = comment_text(token) {
            let _ = writeln!(out, "    <!-- {} -->", comment.replace("--", "- -"));
        }
        let kind = resource_type(token);
        let _ = writeln!(
            out,
            "    <{kind} name=\"{}\">{}</{kind}>",
            resource_name(&path),
            value(token, kind, refs)
        );
    }

    let _ = writeln!(out, "</resources>");
    out
}

fn value(token: &Token, kind: &str, refs: &ReferenceTable<'_>) -> String {
    match &token.value {
        TokenValue::Reference(path) if refs.owner(path).is_some() => {
            format!("@{}/{}", kind, resource_name(path))
        }
        TokenValue::Reference(_) | TokenValue::Sentinel(_) => {
            escape(&format!("\"{}\"", token.value))
        }
        TokenValue::Literal(literal) if kind == "dimen" => match literal.as_number() {
            Some(n) => format!("{}dp", n),
            None => escape(&literal.to_string()),
        },
        TokenValue::Literal(Literal::Number(n)) if kind == "integer" => format!("{}", *n as i64),
        TokenValue::Literal(literal) => escape(&literal.to_string()),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "\\'")
}
