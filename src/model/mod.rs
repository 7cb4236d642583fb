//! Parse-tree-to-model compiler.
//!
//! Two passes:
//!
//! 1. [`TableBuilder`] walks the syntax tree once in pre-order and emits one
//!    [`ElementRecord`] per model-relevant node into a flat [`ModelTable`].
//!    Identity, qualified names, classification and cross-references are all
//!    settled here.
//! 2. [`Model::from_table`] consumes the table in index order and builds the
//!    typed ownership tree.
//!
//! ```
//! use syster_model::model::Model;
//!
//! let model = Model::from_source("package P1 { part A; part B specializes A; }").unwrap();
//! let b = model.lookup_by_index(2).and_then(|n| n.record()).unwrap();
//! assert_eq!(b.related_index, Some(1));
//! assert_eq!(b.fully_qualified_name, "P1.B");
//! ```

mod builder;
mod error;
mod fqn;
mod identity;
pub mod kind;
mod node;
mod record;
mod resolve;
mod table;
mod tree;

pub use builder::{TableBuilder, build_table};
pub use error::ModelError;
pub use kind::{Classification, ElementKind, classify};
pub use node::{Archetype, ArchitectureLayer, ModelNode, NodeDict, NodeId, NodeKind};
pub use record::{ElementRecord, ElementUid, RelatedName, base_name, is_generated_name};
pub use table::ModelTable;
pub use tree::{Model, Preorder};
