//! Error types for building a model.

use std::path::PathBuf;

use thiserror::Error;

use crate::base::Position;

/// Errors that abort a model build.
///
/// Everything except [`ModelError::Syntax`] and [`ModelError::Io`] signals a
/// broken invariant in traversal or classification. Dangling cross-references
/// are not errors; they are recorded with empty relationship fields.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The source text did not parse.
    #[error("syntax error at {position}: {message} ({count} error(s) total)")]
    Syntax {
        position: Position,
        message: String,
        count: usize,
    },

    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A syntax node reached the identity assigner a second time.
    #[error("syntax node for element {index} visited twice")]
    VisitedTwice { index: usize },

    /// Two records claimed the same index.
    #[error("duplicate element index {0}")]
    DuplicateIndex(usize),

    /// A relationship tried to target a generated placeholder name.
    #[error("relationship targets unnamed element '{0}'")]
    UnnamedRelationTarget(String),

    /// A record names a parent that is not in the table or tree.
    #[error("element {index} refers to missing parent {parent}")]
    MissingParent { index: usize, parent: usize },

    /// Walking the parent chain did not terminate at a top-level element.
    #[error("ancestry of element {0} does not reach the root")]
    BrokenAncestry(usize),

    /// A kind spelling outside the taxonomy.
    #[error("unknown element kind '{0}'")]
    UnknownKind(String),

    /// A recognized construct the tree assembler deliberately rejects.
    #[error("'{kind}' elements are not implemented (element {name})")]
    Unimplemented { kind: &'static str, name: String },
}

impl ModelError {
    /// Create an unknown-kind error.
    pub fn unknown_kind(spelling: impl Into<String>) -> Self {
        Self::UnknownKind(spelling.into())
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that indicate a bug rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(
            self,
            Self::Syntax { .. } | Self::Io { .. } | Self::Unimplemented { .. }
        )
    }
}
