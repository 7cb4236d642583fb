//! Foundation types shared by every layer of the model compiler.
//!
//! - [`constants`] - separators, placeholder names and the root sentinel
//! - [`Position`] - line/column locations used when reporting syntax errors
//! - [`text`] - quote and comment-delimiter stripping for raw token text
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;
pub mod text;

pub use position::Position;
