//! Design variable export model.
//!
//! These types mirror the upstream export document: collections of
//! variables, each holding one raw value per mode. They are immutable once
//! loaded.

use indexmap::IndexMap;
use serde::Deserialize;

/// The value type a variable declares upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedKind {
    Color,
    Float,
    String,
    Boolean,
}

impl ResolvedKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResolvedKind::Color => "COLOR",
            ResolvedKind::Float => "FLOAT",
            ResolvedKind::String => "STRING",
            ResolvedKind::Boolean => "BOOLEAN",
        }
    }
}

/// A colour with channels in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl RgbaColor {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A literal mode value as it appears in the export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawLiteral {
    Color(RgbaColor),
    Number(f64),
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum AliasTag {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct AliasRef {
    #[serde(rename = "type")]
    #[allow(dead_code)]
    tag: AliasTag,
    id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawModeValue {
    Alias(AliasRef),
    Literal(RawLiteral),
}

/// One stored value of a variable: a literal or an alias to another variable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawModeValue")]
pub enum ModeValue {
    Alias(String),
    Literal(RawLiteral),
}

impl From<RawModeValue> for ModeValue {
    fn from(raw: RawModeValue) -> Self {
        match raw {
            RawModeValue::Alias(alias) => ModeValue::Alias(alias.id),
            RawModeValue::Literal(literal) => ModeValue::Literal(literal),
        }
    }
}

impl ModeValue {
    pub fn alias(id: impl Into<String>) -> Self {
        ModeValue::Alias(id.into())
    }

    pub fn color(r: f64, g: f64, b: f64, a: f64) -> Self {
        ModeValue::Literal(RawLiteral::Color(RgbaColor::new(r, g, b, a)))
    }

    pub fn number(n: f64) -> Self {
        ModeValue::Literal(RawLiteral::Number(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        ModeValue::Literal(RawLiteral::Text(s.into()))
    }
}

/// A mode declared by a collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A design variable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,

    /// Slash-delimited display name, e.g. `Color/Red/500`.
    pub name: String,

    #[serde(rename = "resolvedType")]
    pub resolved_kind: ResolvedKind,

    #[serde(default)]
    pub description: Option<String>,

    /// Mode id -> value, in declaration order. `null` entries are kept as
    /// missing values.
    #[serde(default)]
    pub values_by_mode: IndexMap<String, Option<ModeValue>>,
}

impl Variable {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ResolvedKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resolved_kind: kind,
            description: None,
            values_by_mode: IndexMap::new(),
        }
    }

    /// Builder-style helper for fixtures and tests.
    pub fn with_value(mut self, mode_id: impl Into<String>, value: ModeValue) -> Self {
        self.values_by_mode.insert(mode_id.into(), Some(value));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, ignoring blank strings.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// A named group of variables sharing a set of modes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modes: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.modes.push(Mode {
            mode_id: mode_id.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }
}

/// The whole export document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Export {
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Export {
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }
}
