//! JSON formats.
//!
//! Two shapes are supported:
//!
//! - [`Json`] nests nodes the way the tree owns them. Each node carries the
//!   [`NodeDict`] field set plus its `children`:
//!
//! ```json
//! {
//!   "name": "root",
//!   "children": [
//!     { "layer": "Kernel Element", "kind": "package", "name": "P1@0_None", "index": 0,
//!       "children": [ ... ] }
//!   ]
//! }
//! ```
//!
//! - [`TableJson`] is the flat record table as an array in index order. It
//!   keeps every record field and can be read back and reassembled.

use serde::Serialize;

use super::{FormatCapability, InterchangeError, ModelFormat};
use crate::base::constants::ROOT_NODE_NAME;
use crate::model::{ElementRecord, Model, ModelNode, ModelTable, NodeDict};

/// Nested tree JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

#[derive(Serialize)]
struct JsonRoot {
    name: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

#[derive(Serialize)]
struct JsonNode {
    #[serde(flatten)]
    dict: NodeDict,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

fn json_children(model: &Model, node: &ModelNode) -> Vec<JsonNode> {
    model
        .children_of(node)
        .filter_map(|child| {
            let record = child.record()?;
            Some(JsonNode {
                dict: NodeDict::new(child.kind(), record, node.name()),
                children: json_children(model, child),
            })
        })
        .collect()
}

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::WRITE_ONLY
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        let root = JsonRoot {
            name: ROOT_NODE_NAME,
            children: json_children(model, model.root()),
        };
        Ok(serde_json::to_vec_pretty(&root)?)
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        serde_json::from_slice::<serde_json::Value>(input)?;
        Ok(())
    }
}

/// Flat record table JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableJson;

impl TableJson {
    /// Parse a table without assembling it.
    pub fn read_table(&self, input: &[u8]) -> Result<ModelTable, InterchangeError> {
        let records: Vec<ElementRecord> = serde_json::from_slice(input)?;
        Ok(ModelTable::from_records(records)?)
    }
}

impl ModelFormat for TableJson {
    fn name(&self) -> &'static str {
        "Table JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["table.json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::FULL
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        Ok(serde_json::to_vec_pretty(&model.records())?)
    }

    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let table = self.read_table(input)?;
        Ok(Model::from_table(&table)?)
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        match serde_json::from_slice::<serde_json::Value>(input)? {
            serde_json::Value::Array(_) => Ok(()),
            _ => Err(InterchangeError::json("expected an array of element records")),
        }
    }
}
