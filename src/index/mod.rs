//! Variable index.
//!
//! Provides lookup of every exported variable by id, together with the
//! collection that owns it. The index borrows from the [`Export`] and is
//! immutable after construction.
//!
//! # Example
//!
//! ```ignore
//! use strata::index::VariableIndex;
//!
//! let index = VariableIndex::build(&export);
//! if let Some(record) = index.get("VariableID:1:2") {
//!     println!("{} in {}", record.variable.name, record.collection_name);
//! }
//! ```

use std::collections::HashMap;

use crate::types::{Collection, Export, Variable};

/// A variable together with its owning collection.
#[derive(Debug, Clone, Copy)]
pub struct VariableRecord<'a> {
    pub variable: &'a Variable,
    pub collection_id: &'a str,
    pub collection_name: &'a str,
}

impl<'a> VariableRecord<'a> {
    fn new(variable: &'a Variable, collection: &'a Collection) -> Self {
        Self {
            variable,
            collection_id: &collection.id,
            collection_name: &collection.name,
        }
    }
}

/// Lookup of variables by id.
#[derive(Debug, Default)]
pub struct VariableIndex<'a> {
    variables: HashMap<&'a str, VariableRecord<'a>>,
}

impl<'a> VariableIndex<'a> {
    /// Index every variable of every collection.
    ///
    /// Ids are assumed unique upstream; a repeated id replaces the earlier
    /// record.
    pub fn build(export: &'a Export) -> Self {
        let capacity = export.collections.iter().map(|c| c.variables.len()).sum();
        let mut variables = HashMap::with_capacity(capacity);

        for collection in &export.collections {
            for variable in &collection.variables {
                variables.insert(variable.id.as_str(), VariableRecord::new(variable, collection));
            }
        }

        Self { variables }
    }

    /// Get a variable record by id.
    pub fn get(&self, id: &str) -> Option<&VariableRecord<'a>> {
        self.variables.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.variables.contains_key(id)
    }

    /// Get the total number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
