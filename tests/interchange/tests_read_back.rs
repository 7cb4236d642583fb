//! Interchange Tests - Reading flat tables back

use std::fs;

use syster_model::interchange::{
    ExportOptions, InterchangeError, ModelFormat, TableJson, Yaml, export,
};
use syster_model::model::Model;
use tempfile::TempDir;

use crate::helpers::model_helpers::model_of;
use crate::helpers::source_fixtures::*;

fn assert_same_model(left: &Model, right: &Model) {
    assert_eq!(left.to_table().unwrap(), right.to_table().unwrap());
    assert_eq!(left.to_string(), right.to_string());
}

#[test]
fn test_table_json_read_back() {
    let model = model_of(CONNECTION_BLOCK);
    let bytes = TableJson.write(&model).unwrap();
    TableJson.validate(&bytes).unwrap();
    let restored = TableJson.read(&bytes).unwrap();
    assert_same_model(&model, &restored);
}

#[test]
fn test_yaml_read_back() {
    let model = model_of(REDEFINITION);
    let bytes = Yaml.write(&model).unwrap();
    Yaml.validate(&bytes).unwrap();
    let restored = Yaml.read(&bytes).unwrap();
    assert_same_model(&model, &restored);
}

#[test]
fn test_yaml_read_back_from_disk() {
    let dir = TempDir::new().unwrap();
    let model = model_of(MESSAGE);
    let path = export(&model, &Yaml, &ExportOptions::new(dir.path())).unwrap();
    let restored = Yaml.read(&fs::read(path).unwrap()).unwrap();
    assert_same_model(&model, &restored);
}

#[test]
fn test_about_comment_table_reads_but_does_not_assemble() {
    // Written from a table-only build, since the tree rejects the record
    let table = syster_model::build_table(COMMENT_ABOUT).unwrap();
    let records: Vec<_> = table.in_index_order();
    let bytes = serde_json::to_vec(&records).unwrap();

    assert_eq!(TableJson.read_table(&bytes).unwrap(), table);
    assert!(matches!(
        TableJson.read(&bytes),
        Err(InterchangeError::Model(_))
    ));
}

#[test]
fn test_malformed_input_is_rejected() {
    assert!(matches!(
        TableJson.read(b"not json"),
        Err(InterchangeError::Json(_))
    ));
    assert!(Yaml.validate(b"key: value").is_err());
}
