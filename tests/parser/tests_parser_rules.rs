//! Parser Tests - Rule kinds and lossless trees

use rstest::rstest;
use syster_model::parser::{SyntaxKind, SyntaxNode, parse};

use crate::helpers::source_fixtures::*;

/// Rule tags of every composite node, in pre-order
fn rule_tags(input: &str) -> Vec<&'static str> {
    let parsed = parse(input);
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors);
    parsed
        .syntax()
        .descendants()
        .filter_map(|node: SyntaxNode| node.kind().rule_tag())
        .filter(|tag| !matches!(*tag, "model" | "namespace_body"))
        .collect()
}

#[rstest]
#[case(SIMPLE_PART_DEF)]
#[case(NESTED_PACKAGE)]
#[case(DEEPLY_NESTED_PACKAGES)]
#[case(PART_WITH_USAGES)]
#[case(SUBSETS)]
#[case(REDEFINITION)]
#[case(CONNECTION_BLOCK)]
#[case(MESSAGE)]
#[case(NAMED_DOC)]
#[case(COMMENT_ABOUT)]
#[case(USE_CASE)]
#[case(ENUMERATION)]
#[case(REFERENCE)]
#[case(IMPORT)]
#[case(QUOTED_NAMES)]
fn test_fixture_round_trips_text(#[case] input: &str) {
    let parsed = parse(input);
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors);
    assert_eq!(parsed.syntax().text().to_string(), input);
}

#[rstest]
#[case(SIMPLE_PART_DEF, &["part_def"])]
#[case(SIMPLE_PORT_DEF, &["port_def"])]
#[case(SIMPLE_ITEM_DEF, &["feature_item_def"])]
#[case(SIMPLE_ATTRIBUTE_DEF, &["feature_attribute_def"])]
#[case(SPECIALIZES_SCENARIO, &["package", "part_def", "feature_part_specializes"])]
#[case(DANGLING_SPECIALIZATION, &["feature_part_specializes"])]
#[case(REDEFINITION, &["part_def", "feature_attribute_def", "part_def_specializes", "feature_attribute_redefines"])]
#[case(CONNECT_SCENARIO, &["connect", "connect_expr", "connect_expr"])]
#[case(UNNAMED_COMMENT, &["package", "comment_unnamed"])]
#[case(NAMED_DOC, &["part_def", "doc_named"])]
#[case(COMMENT_ABOUT, &["part_def", "comment_named_about"])]
#[case(ENUMERATION, &["enum_def", "enum_value", "enum_value", "enum_value"])]
#[case(REFERENCE, &["feature_item_def", "part_def", "feature_item_ref"])]
#[case(IMPORT, &["package", "package", "import_package"])]
fn test_rule_tags(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(rule_tags(input), expected);
}

#[test]
fn test_subsets_rule() {
    let tags = rule_tags(SUBSETS);
    assert!(tags.contains(&"feature_part_specializes_subsets"));
}

#[test]
fn test_message_has_three_participants() {
    let parsed = parse(MESSAGE);
    let count = parsed
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::MESSAGE_EXPR)
        .count();
    assert_eq!(count, 3);
}

#[test]
fn test_use_case_rules() {
    let tags = rule_tags(USE_CASE);
    assert_eq!(
        tags,
        vec!["use_case_def", "subject_def", "objective_def", "doc_unnamed", "include"]
    );
}
