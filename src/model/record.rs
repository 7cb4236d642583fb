//! The flat element record produced by the table builder.

use std::collections::BTreeSet;
use std::fmt;

use uuid::Uuid;

use super::ElementKind;
use crate::base::constants::{INDEX_DELIMITER, NAME_TAG_DELIMITER, NO_PARENT, UNNAMED_ELEMENT_NAME};
use crate::parser::Keyword;

/// Globally unique identity of an element, independent of its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ElementUid(Uuid);

impl ElementUid {
    /// Generate a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ElementUid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ElementUid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ElementUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Target of a relationship-shaped record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum RelatedName {
    /// Tagged display name of a resolved single target.
    Single(String),
    /// Role-labelled endpoints of a connect or message, in source order.
    Endpoints(Vec<String>),
}

impl fmt::Display for RelatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelatedName::Single(name) => f.write_str(name),
            RelatedName::Endpoints(endpoints) => f.write_str(&endpoints.join(", ")),
        }
    }
}

/// One row of the flat model table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRecord {
    pub index: usize,
    pub uid: ElementUid,
    /// Base name plus the `@index_parentIndex` tag.
    pub display_name: String,
    pub parent_name: Option<String>,
    pub parent_index: Option<usize>,
    pub parent_uid: Option<ElementUid>,
    pub kind: ElementKind,
    /// Grammar rule the record was built from.
    pub rule_kind: String,
    pub related_index: Option<usize>,
    pub related_name: Option<RelatedName>,
    pub value_type: Option<String>,
    pub constant: Option<String>,
    pub multiplicity: Option<String>,
    pub keywords: BTreeSet<Keyword>,
    pub fully_qualified_name: String,
    pub fully_qualified_name_tagged: String,
    pub tree_depth: usize,
    pub comment_text: Option<String>,
}

impl ElementRecord {
    /// Display name without its disambiguation tag.
    pub fn base_name(&self) -> &str {
        base_name(&self.display_name)
    }

    /// True when the element carried no identifier of its own.
    pub fn is_unnamed(&self) -> bool {
        is_generated_name(self.base_name())
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_index.is_none()
    }

    /// A dangling reference: relationship-shaped but no target was found.
    pub fn is_dangling(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Specializes | ElementKind::Redefines | ElementKind::References
        ) && self.related_index.is_none()
    }
}

/// Strip the disambiguation tag from a display name.
pub fn base_name(display_name: &str) -> &str {
    display_name
        .rsplit_once(NAME_TAG_DELIMITER)
        .map(|(base, _)| base)
        .unwrap_or(display_name)
}

/// True for base names spelled exactly like a synthesized placeholder,
/// `GENERATED_NAME_<index>_<parent index | None>`.
///
/// User identifiers that merely share the prefix are not placeholders.
pub fn is_generated_name(name: &str) -> bool {
    let Some(rest) = name
        .trim()
        .strip_prefix(UNNAMED_ELEMENT_NAME)
        .and_then(|rest| rest.strip_prefix(INDEX_DELIMITER))
    else {
        return false;
    };
    let Some((index, parent)) = rest.split_once(INDEX_DELIMITER) else {
        return false;
    };
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    is_number(index) && (is_number(parent) || parent == NO_PARENT)
}

/// Spell a parent index the way tags and placeholders embed it.
pub(crate) fn parent_label(parent_index: Option<usize>) -> String {
    parent_index
        .map(|idx| idx.to_string())
        .unwrap_or_else(|| NO_PARENT.to_string())
}

/// Placeholder base name for an element without identifiers.
pub(crate) fn generated_name(index: usize, parent_index: Option<usize>) -> String {
    format!(
        "{UNNAMED_ELEMENT_NAME}{INDEX_DELIMITER}{index}{INDEX_DELIMITER}{}",
        parent_label(parent_index)
    )
}

/// Append the `@index_parentIndex` disambiguation tag.
pub(crate) fn tag_name(base: &str, index: usize, parent_index: Option<usize>) -> String {
    format!(
        "{base}{NAME_TAG_DELIMITER}{index}{INDEX_DELIMITER}{}",
        parent_label(parent_index)
    )
}
