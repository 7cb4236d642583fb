//! Graphviz DOT export of the ownership tree.
//!
//! Nodes are identified by display name, which is unique per model. Only
//! parent/child edges are drawn.

use std::fmt::Write as _;

use super::{FormatCapability, InterchangeError, ModelFormat};
use crate::model::Model;

/// DOT format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dot;

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Dot {
    /// Render the tree as a `digraph`.
    pub fn render(&self, model: &Model) -> Result<String, std::fmt::Error> {
        let mut out = String::from("digraph tree {\n");
        for node in model.preorder() {
            writeln!(out, "    {};", quote(node.name()))?;
        }
        for node in model.preorder() {
            for child in model.children_of(node) {
                writeln!(out, "    {} -> {};", quote(node.name()), quote(child.name()))?;
            }
        }
        out.push_str("}\n");
        Ok(out)
    }
}

impl ModelFormat for Dot {
    fn name(&self) -> &'static str {
        "DOT"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["dot", "gv"]
    }

    fn mime_type(&self) -> &'static str {
        "text/vnd.graphviz"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::RENDER_ONLY
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        self.render(model)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::unsupported(format!("DOT rendering failed: {e}")))
    }
}
