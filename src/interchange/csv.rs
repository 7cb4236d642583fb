//! CSV table export.
//!
//! One header row, then one row per element record in index order. Fields
//! that hold lists (keywords, connect/message endpoints) are written as JSON
//! arrays; missing values are empty cells.

use super::{FormatCapability, InterchangeError, ModelFormat};
use crate::model::{ElementRecord, Model, RelatedName};

/// Column names, in output order.
pub const COLUMNS: &[&str] = &[
    "index",
    "uid",
    "display_name",
    "parent_name",
    "parent_index",
    "parent_uid",
    "kind",
    "rule_kind",
    "related_index",
    "related_name",
    "value_type",
    "constant",
    "multiplicity",
    "keywords",
    "fully_qualified_name",
    "fully_qualified_name_tagged",
    "tree_depth",
    "comment_text",
];

/// CSV format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

/// Quote a cell when it holds a delimiter, quote or line break.
fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn row(record: &ElementRecord) -> Result<Vec<String>, InterchangeError> {
    let related_name = match &record.related_name {
        None => String::new(),
        Some(RelatedName::Single(name)) => name.clone(),
        Some(RelatedName::Endpoints(endpoints)) => serde_json::to_string(endpoints)?,
    };
    Ok(vec![
        record.index.to_string(),
        record.uid.to_string(),
        record.display_name.clone(),
        opt(&record.parent_name),
        opt(&record.parent_index),
        opt(&record.parent_uid),
        record.kind.to_string(),
        record.rule_kind.clone(),
        opt(&record.related_index),
        related_name,
        opt(&record.value_type),
        opt(&record.constant),
        opt(&record.multiplicity),
        serde_json::to_string(&record.keywords)?,
        record.fully_qualified_name.clone(),
        record.fully_qualified_name_tagged.clone(),
        record.tree_depth.to_string(),
        opt(&record.comment_text),
    ])
}

impl ModelFormat for Csv {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["csv"]
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::WRITE_ONLY
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        let mut out = COLUMNS.join(",");
        out.push('\n');
        for record in model.records() {
            let cells: Vec<String> = row(record)?.iter().map(|c| escape(c)).collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
