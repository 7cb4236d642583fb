//! Keyword/Kind Classifier.
//!
//! Maps a grammar rule-kind tag to the primary [`ElementKind`] that selects a
//! tree variant, plus the fine-grained [`Keyword`] tags spelled inside the
//! tag. Rule kinds that do not describe a model element (the file root,
//! namespace bodies, endpoint expressions) classify to `None`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ModelError;
use crate::parser::Keyword;

/// Primary taxonomy tag of an element record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    #[cfg_attr(feature = "interchange", serde(rename = "package"))]
    Package,
    #[cfg_attr(feature = "interchange", serde(rename = "part"))]
    Part,
    #[cfg_attr(feature = "interchange", serde(rename = "port"))]
    Port,
    #[cfg_attr(feature = "interchange", serde(rename = "connection"))]
    Connection,
    #[cfg_attr(feature = "interchange", serde(rename = "endpart"))]
    EndPart,
    #[cfg_attr(feature = "interchange", serde(rename = "item"))]
    Item,
    #[cfg_attr(feature = "interchange", serde(rename = "enum"))]
    Enum,
    #[cfg_attr(feature = "interchange", serde(rename = "enum_value"))]
    EnumValue,
    #[cfg_attr(feature = "interchange", serde(rename = "usecase"))]
    UseCase,
    #[cfg_attr(feature = "interchange", serde(rename = "objective"))]
    Objective,
    #[cfg_attr(feature = "interchange", serde(rename = "attribute"))]
    Attribute,
    #[cfg_attr(feature = "interchange", serde(rename = "doc"))]
    Doc,
    #[cfg_attr(feature = "interchange", serde(rename = "comment"))]
    Comment,
    #[cfg_attr(feature = "interchange", serde(rename = "include"))]
    Include,
    #[cfg_attr(feature = "interchange", serde(rename = "import"))]
    Import,
    #[cfg_attr(feature = "interchange", serde(rename = "specializes"))]
    Specializes,
    #[cfg_attr(feature = "interchange", serde(rename = "redefines"))]
    Redefines,
    #[cfg_attr(feature = "interchange", serde(rename = "connect"))]
    Connect,
    #[cfg_attr(feature = "interchange", serde(rename = "message"))]
    Message,
    #[cfg_attr(feature = "interchange", serde(rename = "about"))]
    About,
    #[cfg_attr(feature = "interchange", serde(rename = "references"))]
    References,
    #[cfg_attr(feature = "interchange", serde(rename = "actor"))]
    Actor,
}

impl ElementKind {
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::Package,
        ElementKind::Part,
        ElementKind::Port,
        ElementKind::Connection,
        ElementKind::EndPart,
        ElementKind::Item,
        ElementKind::Enum,
        ElementKind::EnumValue,
        ElementKind::UseCase,
        ElementKind::Objective,
        ElementKind::Attribute,
        ElementKind::Doc,
        ElementKind::Comment,
        ElementKind::Include,
        ElementKind::Import,
        ElementKind::Specializes,
        ElementKind::Redefines,
        ElementKind::Connect,
        ElementKind::Message,
        ElementKind::About,
        ElementKind::References,
        ElementKind::Actor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Package => "package",
            ElementKind::Part => "part",
            ElementKind::Port => "port",
            ElementKind::Connection => "connection",
            ElementKind::EndPart => "endpart",
            ElementKind::Item => "item",
            ElementKind::Enum => "enum",
            ElementKind::EnumValue => "enum_value",
            ElementKind::UseCase => "usecase",
            ElementKind::Objective => "objective",
            ElementKind::Attribute => "attribute",
            ElementKind::Doc => "doc",
            ElementKind::Comment => "comment",
            ElementKind::Include => "include",
            ElementKind::Import => "import",
            ElementKind::Specializes => "specializes",
            ElementKind::Redefines => "redefines",
            ElementKind::Connect => "connect",
            ElementKind::Message => "message",
            ElementKind::About => "about",
            ElementKind::References => "references",
            ElementKind::Actor => "actor",
        }
    }

    /// Kinds whose records point at other elements.
    pub fn is_relationship(self) -> bool {
        matches!(
            self,
            ElementKind::Specializes
                | ElementKind::Redefines
                | ElementKind::Connect
                | ElementKind::Message
                | ElementKind::About
                | ElementKind::References
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::unknown_kind(s))
    }
}

/// Result of classifying one rule-kind tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: ElementKind,
    pub keywords: BTreeSet<Keyword>,
}

impl Classification {
    pub fn has(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }
}

/// Primary kind for each model-relevant rule.
fn primary_kind(rule_kind: &str) -> Option<ElementKind> {
    let kind = match rule_kind {
        "package" => ElementKind::Package,
        "import_package" => ElementKind::Import,
        "part_def" => ElementKind::Part,
        "part_def_specializes"
        | "feature_part_specializes"
        | "feature_part_specializes_subsets" => ElementKind::Specializes,
        "port_def" => ElementKind::Port,
        "feature_attribute_def" => ElementKind::Attribute,
        "feature_attribute_redefines" => ElementKind::Redefines,
        "feature_item_def" => ElementKind::Item,
        "feature_item_ref" => ElementKind::References,
        "feature_actor_specializes" => ElementKind::Actor,
        "use_case_def" => ElementKind::UseCase,
        "objective_def" => ElementKind::Objective,
        "include" => ElementKind::Include,
        "message" => ElementKind::Message,
        "connection" => ElementKind::Connection,
        "end_part" => ElementKind::EndPart,
        "connect" => ElementKind::Connect,
        "enum_def" => ElementKind::Enum,
        "enum_value" => ElementKind::EnumValue,
        "comment_unnamed" | "comment_named" => ElementKind::Comment,
        "comment_named_about" => ElementKind::About,
        "doc_unnamed" | "doc_named" => ElementKind::Doc,
        _ => return None,
    };
    Some(kind)
}

/// True when `keyword` appears in `rule_kind` as a whole underscore-delimited word.
///
/// `port` matches `port_def` but not `import_package`.
fn contains_word(rule_kind: &str, keyword: &str) -> bool {
    rule_kind.split('_').any(|word| word == keyword)
}

/// Keyword tags spelled inside a rule-kind tag.
pub fn keywords_of(rule_kind: &str) -> BTreeSet<Keyword> {
    let rule_kind = rule_kind.to_ascii_lowercase();
    Keyword::ALL
        .iter()
        .copied()
        .filter(|kw| contains_word(&rule_kind, kw.as_str()))
        .collect()
}

/// Classify a rule-kind tag, or `None` for rules that are not model elements.
pub fn classify(rule_kind: &str) -> Option<Classification> {
    let kind = primary_kind(rule_kind)?;
    Some(Classification {
        kind,
        keywords: keywords_of(rule_kind),
    })
}
