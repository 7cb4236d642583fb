//! Model Tree Assembler.
//!
//! Second pass: turns the flat table into an ownership tree. Nodes live in an
//! arena; parent and child links are [`NodeId`]s into it.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::builder::build_table;
use super::node::{ModelNode, NodeDict, NodeId, NodeKind};
use super::{ElementRecord, ModelError, ModelTable};

/// The assembled model: a synthetic root owning every top-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    nodes: Vec<ModelNode>,
    by_index: FxHashMap<usize, NodeId>,
    input_file: Option<PathBuf>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            nodes: vec![ModelNode::root()],
            by_index: FxHashMap::default(),
            input_file: None,
        }
    }
}

impl Model {
    /// Compile source text into a model.
    pub fn from_source(source: &str) -> Result<Self, ModelError> {
        let table = build_table(source)?;
        Self::from_table(&table)
    }

    /// Compile a source file, remembering its path for export file naming.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        let mut model = Self::from_source(&source)?;
        model.input_file = Some(path.to_path_buf());
        Ok(model)
    }

    /// Assemble the tree from a finished table.
    ///
    /// Records are taken in ascending index order, so every parent exists
    /// before its children are attached.
    pub fn from_table(table: &ModelTable) -> Result<Self, ModelError> {
        let mut model = Self::default();
        for record in table.in_index_order() {
            let kind = NodeKind::for_record(record)?;
            let parent = match record.parent_index {
                None => NodeId::ROOT,
                Some(parent) => *model.by_index.get(&parent).ok_or(
                    ModelError::MissingParent {
                        index: record.index,
                        parent,
                    },
                )?,
            };
            model.attach(parent, kind, record.clone())?;
        }
        info!(elements = model.len(), "assembled model tree");
        Ok(model)
    }

    fn attach(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        record: ElementRecord,
    ) -> Result<NodeId, ModelError> {
        if self.by_index.contains_key(&record.index) {
            return Err(ModelError::DuplicateIndex(record.index));
        }
        let id = NodeId(self.nodes.len());
        debug!(
            index = record.index,
            ?kind,
            parent = parent.0,
            "attached node"
        );
        self.by_index.insert(record.index, id);
        self.nodes.push(ModelNode {
            id,
            kind,
            record: Some(record),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn root(&self) -> &ModelNode {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&ModelNode> {
        self.nodes.get(id.0)
    }

    pub fn parent_of(&self, node: &ModelNode) -> Option<&ModelNode> {
        node.parent.and_then(|id| self.node(id))
    }

    pub fn children_of<'a>(&'a self, node: &'a ModelNode) -> impl Iterator<Item = &'a ModelNode> + 'a {
        node.children.iter().filter_map(move |&id| self.node(id))
    }

    /// Find the node built from the record with `index`.
    pub fn lookup_by_index(&self, index: usize) -> Option<&ModelNode> {
        self.by_index.get(&index).and_then(|&id| self.node(id))
    }

    /// Number of element nodes, the root excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_deref()
    }

    pub fn set_input_file(&mut self, path: impl Into<PathBuf>) {
        self.input_file = Some(path.into());
    }

    /// Pre-order traversal starting at the root.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            model: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Element nodes in pre-order, the root excluded.
    pub fn elements(&self) -> impl Iterator<Item = &ModelNode> {
        self.preorder().filter(|node| !node.is_root())
    }

    /// Element records in index order.
    pub fn records(&self) -> Vec<&ElementRecord> {
        let mut records: Vec<_> = self.nodes.iter().filter_map(|n| n.record()).collect();
        records.sort_by_key(|record| record.index);
        records
    }

    /// Flat table equivalent to the one the tree was assembled from.
    pub fn to_table(&self) -> Result<ModelTable, ModelError> {
        ModelTable::from_records(self.records().into_iter().cloned())
    }

    /// Every element as a [`NodeDict`], keyed by index, in pre-order.
    pub fn to_dict(&self) -> IndexMap<usize, NodeDict> {
        self.elements()
            .filter_map(|node| {
                let record = node.record()?;
                let parent = self.parent_of(node).map(ModelNode::name).unwrap_or_default();
                Some((record.index, NodeDict::new(node.kind, record, parent)))
            })
            .collect()
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &ModelNode,
        prefix: &str,
        fill: &str,
    ) -> fmt::Result {
        match node.record() {
            Some(record) => writeln!(f, "{prefix}[{}]: {}", record.index, record.display_name)?,
            None => writeln!(f, "{prefix}[{}]: ", node.name())?,
        }
        let count = node.children.len();
        for (position, child) in self.children_of(node).enumerate() {
            let last = position + 1 == count;
            let branch = if last { "└── " } else { "├── " };
            let extend = if last { "    " } else { "│   " };
            self.render(f, child, &format!("{fill}{branch}"), &format!("{fill}{extend}"))?;
        }
        Ok(())
    }
}

/// Renders the tree one node per line as `<prefix>[<index>]: <display name>`.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, self.root(), "", "")
    }
}

/// Pre-order iterator over a [`Model`].
pub struct Preorder<'a> {
    model: &'a Model,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ModelNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.model.node(id)?;
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}
