//! Resolved token values.

use std::fmt;

use serde::{Serialize, Serializer};

use super::path::TokenPath;

/// A canonical literal value, produced by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
}

impl Literal {
    pub fn text(s: impl Into<String>) -> Self {
        Literal::Text(s.into())
    }

    /// Numeric value, reading `px` strings as numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Integer(i) => Some(*i as f64),
            Literal::Text(s) => s.trim().strip_suffix("px")?.trim().parse().ok(),
            Literal::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::Text(s) => serializer.serialize_str(s),
            // Whole floats are written without a trailing `.0`
            Literal::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Literal::Number(n) => serializer.serialize_f64(*n),
            Literal::Integer(i) => serializer.serialize_i64(*i),
            Literal::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Placeholder substituted when a value cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentinel {
    /// An alias points at an id missing from the export.
    Unresolved { id: String },
    /// An alias chain revisits a variable. The chain ends with the repeated id.
    Circular { chain: Vec<String> },
    /// The variable has no value in any mode.
    NoValue { id: String },
}

impl Sentinel {
    /// Short machine-readable code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Sentinel::Unresolved { .. } => "unresolved-alias",
            Sentinel::Circular { .. } => "circular-alias",
            Sentinel::NoValue { .. } => "no-value",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::Unresolved { id } => write!(f, "UNRESOLVED({})", id),
            Sentinel::Circular { chain } => write!(f, "CIRCULAR({})", chain.join(" -> ")),
            Sentinel::NoValue { id } => write!(f, "NO_VALUE({})", id),
        }
    }
}

/// The value of an emitted token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Literal(Literal),
    /// Symbolic reference to a token in a lower layer, displayed as `{a.b.c}`.
    Reference(TokenPath),
    Sentinel(Sentinel),
}

impl TokenValue {
    pub fn reference(&self) -> Option<&TokenPath> {
        match self {
            TokenValue::Reference(path) => Some(path),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match self {
            TokenValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn sentinel(&self) -> Option<&Sentinel> {
        match self {
            TokenValue::Sentinel(sentinel) => Some(sentinel),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Literal(literal) => write!(f, "{}", literal),
            TokenValue::Reference(path) => write!(f, "{{{}}}", path),
            TokenValue::Sentinel(sentinel) => write!(f, "{}", sentinel),
        }
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenValue::Literal(literal) => literal.serialize(serializer),
            other => serializer.collect_str(other),
        }
    }
}

impl From<Literal> for TokenValue {
    fn from(literal: Literal) -> Self {
        TokenValue::Literal(literal)
    }
}

impl From<Sentinel> for TokenValue {
    fn from(sentinel: Sentinel) -> Self {
        TokenValue::Sentinel(sentinel)
    }
}

/// Semantic classification of a token, used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Dimension,
    FontWeight,
    Number,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Dimension => "dimension",
            TokenKind::FontWeight => "fontWeight",
            TokenKind::Number => "number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A resolved token, produced once per variable and artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub value: TokenValue,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TokenKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<TokenValue>) -> Self {
        Self {
            value: value.into(),
            kind: None,
            description: None,
        }
    }

    pub fn with_kind(mut self, kind: Option<TokenKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }
}
