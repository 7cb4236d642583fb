//! Rowan-based parser for the modeling DSL
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! RuleNode adapter (crate::syntax) → model table builder
//! ```
//!
//! Every grammar rule becomes a composite node whose kind carries the
//! rule-kind tag (see [`SyntaxKind::rule_tag`]). Optional sub-fields such as
//! type annotations or multiplicities are emitted as dedicated token kinds.

#[allow(clippy::module_inception)]
mod parser;

pub mod keywords;
mod lexer;
mod syntax_kind;

pub use keywords::Keyword;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, SysMLLanguage};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
