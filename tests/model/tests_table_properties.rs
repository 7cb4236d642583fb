//! Model Tests - Properties of built tables
//!
//! Every source below must build; each test checks one property across all
//! of them.

use rstest::rstest;
use syster_model::base::constants::FQN_SEPARATOR;
use syster_model::model::{Model, base_name, classify};

use crate::helpers::model_helpers::{model_of, table_of};
use crate::helpers::source_fixtures::*;

#[rstest]
#[case(SIMPLE_PART_DEF)]
#[case(NESTED_PACKAGE)]
#[case(DEEPLY_NESTED_PACKAGES)]
#[case(PART_WITH_USAGES)]
#[case(SPECIALIZATION_CHAIN)]
#[case(SUBSETS)]
#[case(REDEFINITION)]
#[case(DUPLICATE_SIBLINGS)]
#[case(CONNECTION_BLOCK)]
#[case(MESSAGE)]
#[case(UNNAMED_COMMENT)]
#[case(USE_CASE)]
#[case(ENUMERATION)]
#[case(REFERENCE)]
#[case(IMPORT)]
#[case(QUOTED_NAMES)]
fn test_indices_are_contiguous_from_zero(#[case] source: &str) {
    let table = table_of(source);
    let indices: Vec<usize> = table.in_index_order().iter().map(|r| r.index).collect();
    let expected: Vec<usize> = (0..table.len()).collect();
    assert_eq!(indices, expected);
}

#[rstest]
#[case(NESTED_PACKAGE)]
#[case(DEEPLY_NESTED_PACKAGES)]
#[case(PART_WITH_USAGES)]
#[case(CONNECTION_BLOCK)]
#[case(USE_CASE)]
#[case(ENUMERATION)]
fn test_parents_precede_children(#[case] source: &str) {
    let table = table_of(source);
    for record in table.iter() {
        match record.parent_index {
            None => assert_eq!(record.tree_depth, 0, "{}", record.display_name),
            Some(parent) => {
                assert!(parent < record.index);
                let owner = table.get(parent).unwrap();
                assert_eq!(record.tree_depth, owner.tree_depth + 1);
                assert_eq!(record.parent_uid, Some(owner.uid));
                assert_eq!(record.parent_name.as_deref(), Some(owner.display_name.as_str()));
            }
        }
    }
}

#[rstest]
#[case(DEEPLY_NESTED_PACKAGES)]
#[case(PART_WITH_USAGES)]
#[case(DUPLICATE_SIBLINGS)]
#[case(CONNECTION_BLOCK)]
#[case(QUOTED_NAMES)]
#[case("package 'Road Vehicles' { part def 'Front Wheel' { attribute 'rim size'; } }")]
fn test_qualified_names_follow_ancestry(#[case] source: &str) {
    let table = table_of(source);
    for record in table.iter() {
        let tagged: Vec<&str> = record
            .fully_qualified_name_tagged
            .split(FQN_SEPARATOR)
            .collect();
        assert_eq!(tagged.len(), record.tree_depth + 1);
        assert_eq!(tagged.last().copied(), Some(record.display_name.as_str()));

        let plain: Vec<&str> = tagged.iter().map(|segment| base_name(segment)).collect();
        assert_eq!(record.fully_qualified_name, plain.join(FQN_SEPARATOR));
    }
}

#[rstest]
#[case(NESTED_PACKAGE)]
#[case(REDEFINITION)]
#[case(MESSAGE)]
#[case(ENUMERATION)]
fn test_display_names_are_unique(#[case] source: &str) {
    let table = table_of(source);
    let mut names: Vec<&str> = table.iter().map(|r| r.display_name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), table.len());
}

#[rstest]
#[case(PART_WITH_USAGES)]
#[case(REDEFINITION)]
#[case(CONNECTION_BLOCK)]
#[case(MESSAGE)]
fn test_classification_is_stable(#[case] source: &str) {
    let table = table_of(source);
    for record in table.iter() {
        let again = classify(&record.rule_kind).unwrap();
        assert_eq!(again.kind, record.kind);
        assert_eq!(again.keywords, record.keywords);
    }
}

#[rstest]
#[case(SPECIALIZATION_CHAIN)]
#[case(REDEFINITION)]
#[case(REFERENCE)]
#[case(COMMENT_ABOUT)]
fn test_resolved_targets_point_backwards(#[case] source: &str) {
    let table = table_of(source);
    for record in table.iter() {
        if let Some(target) = record.related_index {
            assert!(target < record.index, "{} resolves forward", record.display_name);
            assert!(table.contains(target));
        }
    }
}

#[rstest]
#[case(NESTED_PACKAGE)]
#[case(CONNECTION_BLOCK)]
#[case(USE_CASE)]
fn test_tree_round_trips_to_table(#[case] source: &str) {
    let table = table_of(source);
    let model = Model::from_table(&table).unwrap();
    assert_eq!(model.len(), table.len());
    assert_eq!(model.to_table().unwrap(), table);

    for record in table.iter() {
        let node = model.lookup_by_index(record.index).unwrap();
        let parent = model.parent_of(node).unwrap();
        assert_eq!(parent.index(), record.parent_index);
    }
}

#[test]
fn test_builds_are_independent() {
    let first = model_of(NESTED_PACKAGE);
    let second = model_of(NESTED_PACKAGE);
    let a = first.lookup_by_index(0).and_then(|n| n.record()).unwrap();
    let b = second.lookup_by_index(0).and_then(|n| n.record()).unwrap();
    assert_eq!(a.display_name, b.display_name);
    assert_ne!(a.uid, b.uid);
}
