//! Hierarchical text rendering.

use super::{FormatCapability, InterchangeError, ModelFormat};
use crate::model::Model;

/// Indented tree, one `[index]: display name` line per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTree;

impl ModelFormat for TextTree {
    fn name(&self) -> &'static str {
        "Text tree"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::RENDER_ONLY
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        Ok(model.to_string().into_bytes())
    }
}
