//! Alias resolution.
//!
//! Variables may alias other variables. A token either keeps the alias as a
//! symbolic reference to a lower-layer token path, or follows the chain to a
//! literal. Chains are followed with an explicit stack of frames so that a
//! variable reached twice in one chain ends the walk with a
//! [`Sentinel::Circular`] instead of recursing forever.

use std::collections::HashMap;

use crate::config::CollectionIds;
use crate::index::VariableIndex;
use crate::types::{
    semantic_path, token_path, Literal, ModeValue, ResolvedKind, Sentinel, TokenPath, TokenValue,
};

use super::mode::{ModeResolver, ResolutionContext};
use super::normalize::normalize;

/// Variable id -> emitted primitive token path.
#[derive(Debug, Clone, Default)]
pub struct PrimitivePathMap {
    paths: HashMap<String, TokenPath>,
}

impl PrimitivePathMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, path: TokenPath) {
        self.paths.insert(id.into(), path);
    }

    pub fn get(&self, id: &str) -> Option<&TokenPath> {
        self.paths.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.paths.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// The layer a token is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Semantic,
    Component,
}

/// Outcome of resolving a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub value: TokenValue,
    /// Declared kind of the variable that supplied the final value.
    pub kind: Option<ResolvedKind>,
    /// The literal the value stands for. For references this is the target's
    /// fully resolved literal; for sentinels it is absent.
    ///
    /// Layer builders classify with this literal and `kind` rather than the
    /// emitted `{path}` text, so a reference to a colour is typed as a colour
    /// and renderers can pick the right native type.
    pub resolved: Option<Literal>,
}

impl Resolution {
    fn literal(literal: Literal, kind: ResolvedKind) -> Self {
        Self {
            value: TokenValue::Literal(literal.clone()),
            kind: Some(kind),
            resolved: Some(literal),
        }
    }

    fn sentinel(sentinel: Sentinel) -> Self {
        Self {
            value: TokenValue::Sentinel(sentinel),
            kind: None,
            resolved: None,
        }
    }

    fn reference(path: TokenPath, target: Resolution) -> Self {
        Self {
            value: TokenValue::Reference(path),
            kind: target.kind,
            resolved: target.resolved,
        }
    }
}

/// One variable on the current alias chain.
///
/// Frames live on the call stack; every recursive step owns its own frame,
/// so separate resolutions never share visited state.
struct Frame<'f> {
    id: &'f str,
    parent: Option<&'f Frame<'f>>,
}

impl<'f> Frame<'f> {
    fn contains(&self, id: &str) -> bool {
        let mut frame = Some(self);
        while let Some(f) = frame {
            if f.id == id {
                return true;
            }
            frame = f.parent;
        }
        false
    }

    /// Ids from the start of the chain to this frame, then `closing`.
    fn chain(&self, closing: &str) -> Vec<String> {
        let mut ids = Vec::new();
        let mut frame = Some(self);
        while let Some(f) = frame {
            ids.push(f.id.to_string());
            frame = f.parent;
        }
        ids.reverse();
        ids.push(closing.to_string());
        ids
    }
}

/// Resolves variables against an index.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a VariableIndex<'a>,
    modes: ModeResolver<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a VariableIndex<'a>, collections: &'a CollectionIds) -> Self {
        Self {
            index,
            modes: ModeResolver::new(collections),
        }
    }

    pub fn index(&self) -> &'a VariableIndex<'a> {
        self.index
    }

    pub fn modes(&self) -> &ModeResolver<'a> {
        &self.modes
    }

    /// Follow `id` to a normalized literal.
    ///
    /// Never fails: unknown ids, cycles, and variables without values
    /// produce sentinels.
    pub fn resolve_literal(&self, id: &str, context: &ResolutionContext<'_>) -> Resolution {
        self.literal_in(id, context, None)
    }

    /// Resolve `id` as the target of an alias in a semantic or component
    /// token.
    ///
    /// A target with a primitive path becomes a reference to it. For
    /// component tokens, any other known target becomes a reference into the
    /// semantic namespace derived from its name; that reference is not
    /// checked against the emitted semantic trees. Anything else resolves to
    /// a literal.
    pub fn resolve_reference(
        &self,
        id: &str,
        context: &ResolutionContext<'_>,
        primitives: &PrimitivePathMap,
        layer: Layer,
    ) -> Resolution {
        self.reference_in(id, context, primitives, layer, None)
    }

    /// Resolve the variable `id` itself for a semantic or component token:
    /// its own mode value is selected, and an alias is resolved with
    /// [`Resolver::resolve_reference`] rules.
    pub fn resolve_variable(
        &self,
        id: &str,
        context: &ResolutionContext<'_>,
        primitives: &PrimitivePathMap,
        layer: Layer,
    ) -> Resolution {
        let Some(record) = self.index.get(id) else {
            return Resolution::sentinel(Sentinel::Unresolved { id: id.to_string() });
        };
        let frame = Frame { id, parent: None };

        match self.modes.select(record.variable, record.collection_id, context) {
            None => Resolution::sentinel(Sentinel::NoValue { id: id.to_string() }),
            Some((_, ModeValue::Alias(target))) => {
                self.reference_in(target, context, primitives, layer, Some(&frame))
            }
            Some((_, ModeValue::Literal(raw))) => {
                let variable = record.variable;
                let path = token_path(&variable.name);
                Resolution::literal(normalize(raw, &path, variable.resolved_kind), variable.resolved_kind)
            }
        }
    }

    fn reference_in(
        &self,
        id: &str,
        context: &ResolutionContext<'_>,
        primitives: &PrimitivePathMap,
        layer: Layer,
        parent: Option<&Frame<'_>>,
    ) -> Resolution {
        if let Some(path) = primitives.get(id) {
            let target = self.literal_in(id, context, parent);
            return Resolution::reference(path.clone(), target);
        }

        if layer == Layer::Component {
            if let Some(record) = self.index.get(id) {
                let target = self.literal_in(id, context, parent);
                return Resolution::reference(semantic_path(&record.variable.name), target);
            }
        }

        self.literal_in(id, context, parent)
    }

    fn literal_in(
        &self,
        id: &str,
        context: &ResolutionContext<'_>,
        parent: Option<&Frame<'_>>,
    ) -> Resolution {
        if let Some(parent) = parent {
            if parent.contains(id) {
                return Resolution::sentinel(Sentinel::Circular {
                    chain: parent.chain(id),
                });
            }
        }

        let Some(record) = self.index.get(id) else {
            return Resolution::sentinel(Sentinel::Unresolved { id: id.to_string() });
        };

        let frame = Frame { id, parent };
        let variable = record.variable;

        match self.modes.select(variable, record.collection_id, context) {
            None => Resolution::sentinel(Sentinel::NoValue { id: id.to_string() }),
            Some((_, ModeValue::Alias(target))) => self.literal_in(target, context, Some(&frame)),
            Some((_, ModeValue::Literal(raw))) => {
                let path = token_path(&variable.name);
                Resolution::literal(normalize(raw, &path, variable.resolved_kind), variable.resolved_kind)
            }
        }
    }
}
