//! # syster-model
//!
//! Compiles SysML v2 style source text into an indexed model tree with
//! stable identities, fully-qualified names and typed relationships.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON / YAML / CSV / DOT / text exports
//!   ↓
//! model       → table builder (pass 1) and tree assembler (pass 2)
//!   ↓
//! syntax      → RuleNode adapter over concrete syntax nodes
//!   ↓
//! parser      → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! base        → Constants, text helpers, positions
//! ```
//!
//! ## Example
//!
//! ```
//! use syster_model::model::{Model, RelatedName};
//!
//! let model = Model::from_source("connect a.p1 to b.p2;").unwrap();
//! let connect = model.lookup_by_index(0).and_then(|n| n.record()).unwrap();
//! assert_eq!(
//!     connect.related_name,
//!     Some(RelatedName::Endpoints(vec!["Source: a.p1".into(), "Target: b.p2".into()]))
//! );
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → model → interchange)
// ============================================================================

/// Foundation types: naming constants, text helpers, positions
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, rowan CST
pub mod parser;

/// Syntax: uniform node adapter consumed by the model builder
pub mod syntax;

/// Model: flat element table and typed ownership tree
pub mod model;

/// Export formats: JSON, YAML, CSV, DOT, text tree
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use model::{ElementKind, ElementRecord, Model, ModelError, ModelTable, build_table};
pub use parser::{Keyword, parse};
pub use syntax::RuleNode;
