//! Parser modules for strata input files.
//!
//! The only input document is the design tool's variable export: a JSON
//! object holding collections, their modes, and their variables.
//!
//! # Usage
//!
//! ```ignore
//! use strata::parser::load_export;
//!
//! let export = load_export(Path::new("tokens.json"))?;
//! for collection in &export.collections {
//!     println!("{}: {} variables", collection.name, collection.variables.len());
//! }
//! ```

mod export;

pub use export::{load_export, parse_export};
