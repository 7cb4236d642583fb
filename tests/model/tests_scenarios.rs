//! Model Tests - End-to-end scenarios
//!
//! Source text in, records and tree out.

use syster_model::model::{ElementKind, Model, ModelError, NodeKind, RelatedName, build_table};
use syster_model::parser::Keyword;

use crate::helpers::model_helpers::{model_of, record_named, table_of};
use crate::helpers::source_fixtures::*;

fn single(name: &str) -> Option<RelatedName> {
    Some(RelatedName::Single(name.to_string()))
}

fn endpoints(labels: &[&str]) -> Option<RelatedName> {
    Some(RelatedName::Endpoints(
        labels.iter().map(|l| l.to_string()).collect(),
    ))
}

// ============================================================================
// Specialization
// ============================================================================

#[test]
fn test_specializes_resolves_earlier_sibling() {
    let table = table_of(SPECIALIZES_SCENARIO);
    assert_eq!(table.len(), 3);

    let package = table.get(0).unwrap();
    assert_eq!(package.display_name, "P1@0_None");
    assert_eq!(package.kind, ElementKind::Package);
    assert!(package.is_top_level());

    let a = table.get(1).unwrap();
    assert_eq!(a.display_name, "A@1_0");
    assert_eq!(a.kind, ElementKind::Part);
    assert_eq!(a.related_index, None);

    let b = table.get(2).unwrap();
    assert_eq!(b.display_name, "B@2_0");
    assert_eq!(b.kind, ElementKind::Specializes);
    assert!(b.keywords.contains(&Keyword::Specializes));
    assert_eq!(b.related_index, Some(1));
    assert_eq!(b.related_name, single("A@1_0"));
    assert_eq!(b.fully_qualified_name, "P1.B");
    assert_eq!(b.fully_qualified_name_tagged, "P1@0_None.B@2_0");
    assert_eq!(b.tree_depth, 1);
}

#[test]
fn test_specializes_tree_shape() {
    let model = model_of(SPECIALIZES_SCENARIO);
    let expected = concat!(
        "[root]: \n",
        "└── [0]: P1@0_None\n",
        "    ├── [1]: A@1_0\n",
        "    └── [2]: B@2_0\n",
    );
    assert_eq!(model.to_string(), expected);

    let b = model.lookup_by_index(2).unwrap();
    assert_eq!(b.kind(), NodeKind::Specializes);
    assert_eq!(model.parent_of(b).and_then(|p| p.index()), Some(0));
}

#[test]
fn test_specialization_chain() {
    let table = table_of(SPECIALIZATION_CHAIN);
    let car = record_named(&table, "Car");
    assert_eq!(car.related_name, single("Vehicle@1_None"));
    let sports = record_named(&table, "SportsCar");
    assert_eq!(sports.related_index, Some(car.index));
}

#[test]
fn test_dangling_specialization_is_kept() {
    let table = table_of(DANGLING_SPECIALIZATION);
    let c = table.get(0).unwrap();
    assert_eq!(c.display_name, "C@0_None");
    assert_eq!(c.related_index, None);
    assert_eq!(c.related_name, None);
    assert!(c.is_dangling());

    let model = Model::from_table(&table).unwrap();
    assert_eq!(model.len(), 1);
}

#[test]
fn test_forward_reference_is_dangling() {
    let table = table_of("part B specializes A; part A;");
    let b = record_named(&table, "B");
    assert!(b.is_dangling());
}

#[test]
fn test_duplicate_names_resolve_to_first() {
    let table = table_of("part A; part A; part B specializes A;");
    let b = record_named(&table, "B");
    assert_eq!(b.related_index, Some(0));
}

#[test]
fn test_placeholder_prefixed_names_resolve() {
    let table = table_of("part def GENERATED_NAME_total; part x specializes GENERATED_NAME_total;");
    let total = table.get(0).unwrap();
    assert!(!total.is_unnamed());

    let x = record_named(&table, "x");
    assert_eq!(x.related_index, Some(0));
    assert_eq!(x.related_name, single("GENERATED_NAME_total@0_None"));
}

#[test]
fn test_subsets_resolves_specialized_type() {
    let table = table_of(SUBSETS);
    let front = record_named(&table, "frontWheels");
    assert_eq!(front.rule_kind, "feature_part_specializes_subsets");
    assert!(front.keywords.contains(&Keyword::Subsets));
    assert_eq!(front.related_name, single("Wheel@0_None"));
    assert_eq!(front.value_type.as_deref(), Some("Wheel"));
    assert_eq!(front.multiplicity.as_deref(), Some("[2]"));
}

// ============================================================================
// Redefinition and references
// ============================================================================

#[test]
fn test_redefinition_resolves_inherited_feature() {
    let table = table_of(REDEFINITION);
    let car = record_named(&table, "Car");
    assert_eq!(car.related_index, Some(0));

    let redefined = table
        .iter()
        .find(|r| r.kind == ElementKind::Redefines)
        .unwrap();
    assert_eq!(redefined.display_name, "mass@3_2");
    assert_eq!(redefined.related_index, Some(1));
    assert_eq!(redefined.related_name, single("mass@1_0"));
    assert_eq!(redefined.constant.as_deref(), Some("1200"));
    assert_eq!(redefined.fully_qualified_name, "Car.mass");

    let model = model_of(REDEFINITION);
    let node = model.lookup_by_index(redefined.index).unwrap();
    assert_eq!(node.kind(), NodeKind::Redefines);
}

#[test]
fn test_reference_resolves_through_type() {
    let table = table_of(REFERENCE);
    let contents = record_named(&table, "contents");
    assert_eq!(contents.kind, ElementKind::References);
    assert_eq!(contents.related_index, Some(0));
    assert_eq!(contents.related_name, single("Fuel@0_None"));

    let model = model_of(REFERENCE);
    let node = model.lookup_by_index(contents.index).unwrap();
    assert_eq!(node.kind(), NodeKind::References);
}

#[test]
fn test_reference_with_explicit_target() {
    let table = table_of("item def Fuel; item def Oil; ref item tankContents : Fuel references Oil;");
    let contents = record_named(&table, "tankContents");
    assert_eq!(contents.related_name, single("Oil@1_None"));
}

// ============================================================================
// Connections and messages
// ============================================================================

#[test]
fn test_connect_endpoints() {
    let table = table_of(CONNECT_SCENARIO);
    let connect = table.get(0).unwrap();
    assert_eq!(connect.kind, ElementKind::Connect);
    assert!(connect.is_unnamed());
    assert_eq!(connect.display_name, "GENERATED_NAME_0_None@0_None");
    assert_eq!(
        connect.related_name,
        endpoints(&["Source: a.p1", "Target: b.p2"])
    );
    assert_eq!(connect.related_index, None);
    assert!(!connect.is_dangling());
}

#[test]
fn test_connection_block() {
    let table = table_of(CONNECTION_BLOCK);
    let feed = record_named(&table, "feed");
    assert_eq!(feed.kind, ElementKind::Connection);

    let ends: Vec<_> = table
        .iter()
        .filter(|r| r.kind == ElementKind::EndPart)
        .map(|r| r.base_name().to_string())
        .collect();
    assert_eq!(ends, vec!["source", "target"]);

    let connect = table
        .iter()
        .find(|r| r.kind == ElementKind::Connect)
        .unwrap();
    assert_eq!(connect.parent_index, Some(feed.index));
    assert_eq!(
        connect.related_name,
        endpoints(&["Source: a.outlet", "Target: b.inlet"])
    );

    let model = model_of(CONNECTION_BLOCK);
    let node = model.lookup_by_index(connect.index).unwrap();
    assert_eq!(node.kind(), NodeKind::Connect);
    let end = model.lookup_by_index(record_named(&table, "source").index).unwrap();
    assert_eq!(end.kind(), NodeKind::ConnectionEnd);
}

#[test]
fn test_message_participants() {
    let table = table_of(MESSAGE);
    let message = record_named(&table, "sendSignal");
    assert_eq!(message.kind, ElementKind::Message);
    assert_eq!(
        message.related_name,
        endpoints(&["Of: Signal", "From: sender.out", "To: receiver"])
    );
    assert_eq!(message.related_index, None);

    let model = model_of(MESSAGE);
    let node = model.lookup_by_index(message.index).unwrap();
    assert_eq!(node.kind(), NodeKind::Message);
}

// ============================================================================
// Annotations
// ============================================================================

#[test]
fn test_unnamed_comment() {
    let table = table_of(UNNAMED_COMMENT);
    let comment = table.get(1).unwrap();
    assert_eq!(comment.kind, ElementKind::Comment);
    assert_eq!(comment.display_name, "GENERATED_NAME_1_0@1_0");
    assert_eq!(comment.comment_text.as_deref(), Some("Top level note."));
    assert!(comment.is_unnamed());
}

#[test]
fn test_named_doc() {
    let table = table_of(NAMED_DOC);
    let doc = record_named(&table, "Purpose");
    assert_eq!(doc.kind, ElementKind::Doc);
    assert_eq!(doc.comment_text.as_deref(), Some("Converts fuel to torque."));
    assert_eq!(doc.fully_qualified_name, "Engine.Purpose");
}

#[test]
fn test_comment_about_builds_table_but_not_tree() {
    let table = table_of(COMMENT_ABOUT);
    let note = record_named(&table, "Note");
    assert_eq!(note.kind, ElementKind::About);
    assert_eq!(note.related_index, Some(0));

    let err = Model::from_table(&table).unwrap_err();
    assert!(matches!(err, ModelError::Unimplemented { kind: "about", .. }));
    assert!(!err.is_invariant_violation());
}

// ============================================================================
// Use cases
// ============================================================================

#[test]
fn test_actor_is_rejected_by_assembler() {
    let table = table_of(ACTOR);
    let driver = record_named(&table, "driver");
    assert_eq!(driver.kind, ElementKind::Actor);

    match Model::from_source(ACTOR) {
        Err(ModelError::Unimplemented { kind, name }) => {
            assert_eq!(kind, "actor");
            assert_eq!(name, driver.display_name);
        }
        other => panic!("expected unimplemented actor, got {other:?}"),
    }
}

#[test]
fn test_use_case_members() {
    let table = table_of(USE_CASE);
    let kinds: Vec<ElementKind> = table.in_index_order().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::UseCase,
            ElementKind::Objective,
            ElementKind::Doc,
            ElementKind::Include,
        ]
    );
    let doc = table.get(2).unwrap();
    assert_eq!(doc.parent_index, Some(1));
    assert_eq!(doc.tree_depth, 2);
    assert_eq!(record_named(&table, "Drive").parent_index, Some(0));
}

// ============================================================================
// Enumerations, imports, literals
// ============================================================================

#[test]
fn test_enumeration_values() {
    let model = model_of(ENUMERATION);
    let color = model.lookup_by_index(0).unwrap();
    assert_eq!(color.kind(), NodeKind::EnumDef);

    let values: Vec<(&str, Option<&str>)> = model
        .children_of(color)
        .filter_map(|n| n.record())
        .map(|r| (r.base_name(), r.constant.as_deref()))
        .collect();
    assert_eq!(
        values,
        vec![("red", None), ("green", None), ("blue", Some("3"))]
    );
}

#[test]
fn test_import_is_recorded() {
    let table = table_of(IMPORT);
    let import = table
        .iter()
        .find(|r| r.kind == ElementKind::Import)
        .unwrap();
    assert_eq!(import.base_name(), "Vehicles");
    assert_eq!(import.parent_index, Some(1));
    assert_eq!(import.related_index, None);
}

#[test]
fn test_quotes_are_stripped() {
    let table = table_of(QUOTED_NAMES);
    let wheel = table.get(0).unwrap();
    assert_eq!(wheel.display_name, "Front Wheel@0_None");
    let label = record_named(&table, "label");
    assert_eq!(label.value_type.as_deref(), Some("String"));
    assert_eq!(label.constant.as_deref(), Some("spare"));
}

#[test]
fn test_usages_carry_literal_fields() {
    let table = table_of(PART_WITH_USAGES);
    let wheels = record_named(&table, "wheels");
    assert_eq!(wheels.value_type.as_deref(), Some("Wheel"));
    assert_eq!(wheels.multiplicity.as_deref(), Some("[4]"));
    let mass = record_named(&table, "mass");
    assert_eq!(mass.kind, ElementKind::Attribute);
    assert_eq!(mass.constant.as_deref(), Some("1500"));
    assert_eq!(mass.fully_qualified_name, "Vehicle.mass");
}

#[test]
fn test_duplicate_siblings_are_disambiguated() {
    let table = table_of(DUPLICATE_SIBLINGS);
    let first = table.get(1).unwrap();
    let second = table.get(2).unwrap();
    assert_eq!(first.fully_qualified_name, second.fully_qualified_name);
    assert_ne!(first.display_name, second.display_name);
    assert_eq!(second.fully_qualified_name_tagged, "P@0_None.A@2_0");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_syntax_error_aborts_build() {
    match build_table("package P {\n    part def ;\n}") {
        Err(ModelError::Syntax { position, message, count }) => {
            assert_eq!(position.line, 2);
            assert_eq!(message, "expected name");
            assert!(count >= 1);
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_separator_in_name_is_syntax_error() {
    match build_table("package P { part 'a.b'; }") {
        Err(ModelError::Syntax { message, .. }) => {
            assert_eq!(message, "name may not contain '.'");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Model::from_file("does/not/exist.sysml").unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}

#[test]
fn test_empty_source() {
    let table = table_of("// nothing here\n");
    assert!(table.is_empty());
    let model = model_of("");
    assert!(model.is_empty());
    assert!(model.root().is_root());
}
