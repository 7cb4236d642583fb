//! Model Tests - Fixture files on disk

use std::path::{Path, PathBuf};

use syster_model::model::{ElementKind, Model};
use walkdir::WalkDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(fixtures_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "sysml"))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

#[test]
fn test_fixture_directory_is_populated() {
    assert!(fixture_files().len() >= 4);
}

#[test]
fn test_every_fixture_builds() {
    for path in fixture_files() {
        let model = match Model::from_file(&path) {
            Ok(model) => model,
            Err(err) => panic!("{}: {err}", path.display()),
        };
        assert!(!model.is_empty(), "{} produced no elements", path.display());
        assert_eq!(model.input_file(), Some(path.as_path()));
        assert_eq!(model.elements().count(), model.len());
    }
}

#[test]
fn test_vehicle_fixture() {
    let model = Model::from_file(fixtures_dir().join("vehicle.sysml")).unwrap();
    let table = model.to_table().unwrap();

    let car = table.find_by_base_name("Car").unwrap();
    assert_eq!(car.kind, ElementKind::Specializes);
    assert_eq!(
        car.related_index,
        table.find_by_base_name("Vehicle").map(|r| r.index)
    );
    assert_eq!(table.iter().filter(|r| r.is_dangling()).count(), 0);
}

#[test]
fn test_connections_fixture() {
    let model = Model::from_file(fixtures_dir().join("connections.sysml")).unwrap();
    let table = model.to_table().unwrap();

    let contents = table.find_by_base_name("contents").unwrap();
    assert_eq!(
        contents.related_index,
        table.find_by_base_name("Fuel").map(|r| r.index)
    );
    let refill = table.find_by_base_name("refill").unwrap();
    assert_eq!(refill.kind, ElementKind::Message);
    assert_eq!(refill.fully_qualified_name, "Plumbing.Assembly.refill");
}

#[test]
fn test_annotations_fixture() {
    let model = Model::from_file(fixtures_dir().join("annotations.sysml")).unwrap();
    let table = model.to_table().unwrap();

    let offset = table.find_by_base_name("offset").unwrap();
    assert_eq!(offset.constant.as_deref(), Some("-0.5"));
    let unit = table.find_by_base_name("Control Unit").unwrap();
    assert_eq!(unit.fully_qualified_name, "Notes.Control Unit");
    let comments = table
        .iter()
        .filter(|r| r.kind == ElementKind::Comment)
        .count();
    assert_eq!(comments, 2);
}
