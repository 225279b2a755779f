//! Nested token trees.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::path::TokenPath;
use super::token::Token;

/// A node in a token tree: either a group of children or a token leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    Token(Token),
    Group(TokenTree),
}

/// Why a token could not be inserted into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeConflict {
    /// A token already exists at this exact path.
    Duplicate(TokenPath),
    /// The path runs through an existing token, or ends on an existing group.
    Shape(TokenPath),
    /// The path has no segments.
    EmptyPath,
}

impl fmt::Display for TreeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeConflict::Duplicate(path) => write!(f, "duplicate token path '{}'", path),
            TreeConflict::Shape(path) => {
                write!(f, "token path '{}' collides with an existing group or token", path)
            }
            TreeConflict::EmptyPath => write!(f, "empty token path"),
        }
    }
}

/// An insertion-ordered nested mapping terminating in tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenTree {
    children: IndexMap<String, TreeNode>,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token at `path`. Paths are unique within a tree: a conflicting
    /// insert leaves the tree unchanged.
    pub fn insert(&mut self, path: &TokenPath, token: Token) -> Result<(), TreeConflict> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(TreeConflict::EmptyPath);
        };

        let mut node = self;
        for segment in parents {
            let child = node
                .children
                .entry(segment.clone())
                .or_insert_with(|| TreeNode::Group(TokenTree::new()));
            node = match child {
                TreeNode::Group(group) => group,
                TreeNode::Token(_) => return Err(TreeConflict::Shape(path.clone())),
            };
        }

        if let Some(existing) = node.children.get(last) {
            return Err(match existing {
                TreeNode::Token(_) => TreeConflict::Duplicate(path.clone()),
                TreeNode::Group(_) => TreeConflict::Shape(path.clone()),
            });
        }

        node.children.insert(last.clone(), TreeNode::Token(token));
        Ok(())
    }

    /// Look up the token at `path`.
    pub fn get(&self, path: &TokenPath) -> Option<&Token> {
        let (last, parents) = path.segments().split_last()?;
        let mut node = self;
        for segment in parents {
            node = match node.children.get(segment)? {
                TreeNode::Group(group) => group,
                TreeNode::Token(_) => return None,
            };
        }
        match node.children.get(last)? {
            TreeNode::Token(token) => Some(token),
            TreeNode::Group(_) => None,
        }
    }

    pub fn contains(&self, path: &TokenPath) -> bool {
        self.get(path).is_some()
    }

    /// All leaves with their full paths, in insertion order.
    pub fn leaves(&self) -> Vec<(TokenPath, &Token)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut out);
        out
    }

    fn collect_leaves<'a>(
        &'a self,
        prefix: &mut Vec<String>,
        out: &mut Vec<(TokenPath, &'a Token)>,
    ) {
        for (key, child) in &self.children {
            prefix.push(key.clone());
            match child {
                TreeNode::Token(token) => out.push((TokenPath::new(prefix.clone()), token)),
                TreeNode::Group(group) => group.collect_leaves(prefix, out),
            }
            prefix.pop();
        }
    }

    /// Number of tokens in the tree.
    pub fn len(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                TreeNode::Token(_) => 1,
                TreeNode::Group(group) => group.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct children, for renderers that walk the nesting.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }
}
