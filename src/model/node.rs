//! Typed tree nodes.

use std::collections::BTreeSet;
use std::fmt;

use super::{ElementKind, ElementRecord, ElementUid, ModelError, RelatedName};
use crate::base::constants::ROOT_NODE_NAME;
use crate::parser::Keyword;

/// Position of a node inside the model arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The synthetic root.
    pub const ROOT: NodeId = NodeId(0);

    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Abstraction layer a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ArchitectureLayer {
    #[cfg_attr(feature = "interchange", serde(rename = "Root Syntactic Element"))]
    RootSyntactic,
    #[cfg_attr(feature = "interchange", serde(rename = "Kernel Element"))]
    Kernel,
    #[cfg_attr(feature = "interchange", serde(rename = "Systems Element"))]
    Systems,
}

impl ArchitectureLayer {
    pub fn as_str(self) -> &'static str {
        match self {
            ArchitectureLayer::RootSyntactic => "Root Syntactic Element",
            ArchitectureLayer::Kernel => "Kernel Element",
            ArchitectureLayer::Systems => "Systems Element",
        }
    }
}

impl fmt::Display for ArchitectureLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a node is a thing or a link between things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Archetype {
    Element,
    Relationship,
}

impl Archetype {
    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Element => "element",
            Archetype::Relationship => "relationship",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Taxonomy variant of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Package,
    Part,
    Port,
    Connection,
    ConnectionEnd,
    Item,
    EnumDef,
    EnumValue,
    UseCase,
    Objective,
    Attribute,
    Doc,
    Comment,
    Include,
    Import,
    Specializes,
    Redefines,
    Connect,
    Message,
    References,
}

impl NodeKind {
    /// Pick the variant for a record.
    ///
    /// Keyword markers take precedence over the primary kind: connect, then
    /// specializes, then redefines, then a message kind, then the primary
    /// kind itself.
    pub fn for_record(record: &ElementRecord) -> Result<Self, ModelError> {
        if let ElementKind::About | ElementKind::Actor = record.kind {
            return Err(ModelError::Unimplemented {
                kind: record.kind.as_str(),
                name: record.display_name.clone(),
            });
        }
        if record.keywords.contains(&Keyword::Connect) {
            return Ok(NodeKind::Connect);
        }
        if record.keywords.contains(&Keyword::Specializes) {
            return Ok(NodeKind::Specializes);
        }
        if record.keywords.contains(&Keyword::Redefines) {
            return Ok(NodeKind::Redefines);
        }
        let kind = match record.kind {
            ElementKind::Message => NodeKind::Message,
            ElementKind::Package => NodeKind::Package,
            ElementKind::Part => NodeKind::Part,
            ElementKind::Port => NodeKind::Port,
            ElementKind::Connection => NodeKind::Connection,
            ElementKind::EndPart => NodeKind::ConnectionEnd,
            ElementKind::Item => NodeKind::Item,
            ElementKind::Enum => NodeKind::EnumDef,
            ElementKind::EnumValue => NodeKind::EnumValue,
            ElementKind::UseCase => NodeKind::UseCase,
            ElementKind::Objective => NodeKind::Objective,
            ElementKind::Attribute => NodeKind::Attribute,
            ElementKind::Doc => NodeKind::Doc,
            ElementKind::Comment => NodeKind::Comment,
            ElementKind::Include => NodeKind::Include,
            ElementKind::Import => NodeKind::Import,
            ElementKind::Specializes => NodeKind::Specializes,
            ElementKind::Redefines => NodeKind::Redefines,
            ElementKind::Connect => NodeKind::Connect,
            ElementKind::References => NodeKind::References,
            ElementKind::About | ElementKind::Actor => {
                return Err(ModelError::Unimplemented {
                    kind: record.kind.as_str(),
                    name: record.display_name.clone(),
                });
            }
        };
        Ok(kind)
    }

    pub fn layer(self) -> ArchitectureLayer {
        match self {
            NodeKind::Root
            | NodeKind::Comment
            | NodeKind::Doc
            | NodeKind::Import
            | NodeKind::Specializes
            | NodeKind::Redefines
            | NodeKind::Connect
            | NodeKind::References => ArchitectureLayer::RootSyntactic,
            NodeKind::Package => ArchitectureLayer::Kernel,
            NodeKind::Part
            | NodeKind::Port
            | NodeKind::Connection
            | NodeKind::ConnectionEnd
            | NodeKind::Item
            | NodeKind::EnumDef
            | NodeKind::EnumValue
            | NodeKind::UseCase
            | NodeKind::Objective
            | NodeKind::Attribute
            | NodeKind::Include
            | NodeKind::Message => ArchitectureLayer::Systems,
        }
    }

    pub fn archetype(self) -> Archetype {
        match self {
            NodeKind::Specializes
            | NodeKind::Redefines
            | NodeKind::Connect
            | NodeKind::Message
            | NodeKind::References => Archetype::Relationship,
            _ => Archetype::Element,
        }
    }
}

/// One node of the model tree.
///
/// Every node but the root wraps the record it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNode {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) record: Option<ElementRecord>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl ModelNode {
    pub(crate) fn root() -> Self {
        Self {
            id: NodeId::ROOT,
            kind: NodeKind::Root,
            record: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn record(&self) -> Option<&ElementRecord> {
        self.record.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Owned children, in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.kind == NodeKind::Root
    }

    pub fn index(&self) -> Option<usize> {
        self.record.as_ref().map(|r| r.index)
    }

    /// Display name, or the root sentinel for the root.
    pub fn name(&self) -> &str {
        self.record
            .as_ref()
            .map(|r| r.display_name.as_str())
            .unwrap_or(ROOT_NODE_NAME)
    }
}

/// Stable export view of one element node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct NodeDict {
    pub layer: ArchitectureLayer,
    pub archetype: Archetype,
    pub kind: ElementKind,
    pub tree_depth: usize,
    pub name: String,
    pub index: usize,
    pub uid: ElementUid,
    /// Display name of the owning node, the root sentinel for top level.
    pub parent: String,
    pub parent_index: Option<usize>,
    pub parent_uid: Option<ElementUid>,
    pub related_name: Option<RelatedName>,
    pub related_index: Option<usize>,
    pub multiplicity: Option<String>,
    pub value_type: Option<String>,
    pub constant: Option<String>,
    pub rule_kind: String,
    pub keywords: BTreeSet<Keyword>,
    pub fully_qualified_name: String,
    pub fully_qualified_name_tagged: String,
    pub comment_text: Option<String>,
}

impl NodeDict {
    pub(crate) fn new(kind: NodeKind, record: &ElementRecord, parent: &str) -> Self {
        Self {
            layer: kind.layer(),
            archetype: kind.archetype(),
            kind: record.kind,
            tree_depth: record.tree_depth,
            name: record.display_name.clone(),
            index: record.index,
            uid: record.uid,
            parent: parent.to_string(),
            parent_index: record.parent_index,
            parent_uid: record.parent_uid,
            related_name: record.related_name.clone(),
            related_index: record.related_index,
            multiplicity: record.multiplicity.clone(),
            value_type: record.value_type.clone(),
            constant: record.constant.clone(),
            rule_kind: record.rule_kind.clone(),
            keywords: record.keywords.clone(),
            fully_qualified_name: record.fully_qualified_name.clone(),
            fully_qualified_name_tagged: record.fully_qualified_name_tagged.clone(),
            comment_text: record.comment_text.clone(),
        }
    }
}
