//! YAML format support.
//!
//! The flat record table in YAML syntax, one sequence entry per record:
//!
//! ```yaml
//! - index: 0
//!   uid: 550e8400-e29b-41d4-a716-446655440000
//!   display_name: P1@0_None
//!   kind: package
//!   ...
//! ```

use super::{FormatCapability, InterchangeError, ModelFormat};
use crate::model::{ElementRecord, Model, ModelTable};

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Yaml {
    /// Parse a table without assembling it.
    pub fn read_table(&self, input: &[u8]) -> Result<ModelTable, InterchangeError> {
        let records: Vec<ElementRecord> = serde_yaml::from_slice(input)?;
        Ok(ModelTable::from_records(records)?)
    }
}

impl ModelFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn capabilities(&self) -> FormatCapability {
        FormatCapability::FULL
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        Ok(serde_yaml::to_string(&model.records())?.into_bytes())
    }

    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let table = self.read_table(input)?;
        Ok(Model::from_table(&table)?)
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::yaml(format!("Invalid UTF-8: {e}")))?;
        match serde_yaml::from_str::<serde_yaml::Value>(content)? {
            serde_yaml::Value::Sequence(_) => Ok(()),
            _ => Err(InterchangeError::yaml("expected a sequence of element records")),
        }
    }
}
