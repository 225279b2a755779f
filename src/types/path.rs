//! Token paths derived from variable names.
//!
//! Every layer derives paths through [`token_path`] so that the primitive
//! path map and later lookups never disagree on normalization.

use std::fmt;

/// Namespace that wraps every semantic token.
pub const SEMANTIC_NAMESPACE: &str = "semantic";

/// A dot-delimited sequence of normalized segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Split an already-normalized dotted path. No normalization is applied.
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Join segments with a custom separator (`-` for CSS, `_` for Android).
    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }

    /// Dotted form, used for substring checks during classification.
    pub fn dotted(&self) -> String {
        self.join(".")
    }

    /// lowerCamelCase identifier, used by the JS and Swift renderers.
    pub fn camel_case(&self) -> String {
        let mut out = String::new();
        for word in self.segments.iter().flat_map(|s| s.split('-')) {
            if word.is_empty() {
                continue;
            }
            if out.is_empty() {
                out.push_str(word);
            } else {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
        }
        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }
        out
    }

    /// A new path with `namespace` prepended.
    pub fn prefixed(&self, namespace: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(namespace.to_string());
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

/// Normalize one name segment: lower-case, non-alphanumeric runs collapsed
/// to a single hyphen, no leading or trailing hyphens.
pub fn normalize_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut pending_hyphen = false;

    for c in segment.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Derive a token path from a slash-delimited display name.
///
/// Segments starting with `_` are private upstream groupings and are dropped.
pub fn token_path(name: &str) -> TokenPath {
    let segments = name
        .split('/')
        .map(str::trim)
        .filter(|s| !s.starts_with('_'))
        .map(normalize_segment)
        .filter(|s| !s.is_empty())
        .collect();

    TokenPath::new(segments)
}

/// Path of a variable inside the semantic namespace.
///
/// A leading `semantic` segment in the name is folded into the namespace,
/// so `Semantic/Brand/Primary` and `Brand/Primary` both map to
/// `semantic.brand.primary`.
pub fn semantic_path(name: &str) -> TokenPath {
    let path = token_path(name);
    let segments = match path.segments.split_first() {
        Some((first, rest)) if first == SEMANTIC_NAMESPACE => rest.to_vec(),
        _ => path.segments,
    };
    TokenPath::new(segments).prefixed(SEMANTIC_NAMESPACE)
}
