//! Core domain types for strata.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Variable`, `Collection`, `Export` - the upstream variable export
//! - `TokenPath` - normalized dotted token identifiers
//! - `Token`, `TokenValue`, `Literal` - resolved output values
//! - `TokenTree` - nested token output per artifact

mod path;
mod token;
mod tree;
mod variable;

pub use path::{normalize_segment, semantic_path, token_path, TokenPath, SEMANTIC_NAMESPACE};
pub use token::{Literal, Sentinel, Token, TokenKind, TokenValue};
pub use tree::{TokenTree, TreeConflict, TreeNode};
pub use variable::{Collection, Export, Mode, ModeValue, RawLiteral, ResolvedKind, RgbaColor, Variable};
