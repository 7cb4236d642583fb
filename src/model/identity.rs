//! Identity & Provenance Assigner.
//!
//! Owns the index counter and a side table from syntax node to assigned
//! index. The syntax tree itself is never touched.

use rustc_hash::FxHashMap;

use super::record::{generated_name, tag_name};
use super::{ElementUid, ModelError, ModelTable};
use crate::syntax::RuleNode;

/// Identity and provenance assigned to one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub index: usize,
    pub uid: ElementUid,
    pub base_name: String,
    /// The base name is a synthesized placeholder.
    pub is_generated: bool,
    pub display_name: String,
    pub parent_index: Option<usize>,
    pub parent_uid: Option<ElementUid>,
    pub parent_name: Option<String>,
}

#[derive(Debug)]
pub(crate) struct IdentityAssigner<N> {
    next_index: usize,
    assigned: FxHashMap<N, usize>,
}

impl<N: RuleNode> IdentityAssigner<N> {
    pub fn new() -> Self {
        Self {
            next_index: 0,
            assigned: FxHashMap::default(),
        }
    }

    /// Assign identity to `node`.
    ///
    /// Parent provenance is read from `table`, which must already hold the
    /// record of the nearest assigned ancestor.
    pub fn assign(&mut self, node: &N, table: &ModelTable) -> Result<Identity, ModelError> {
        if let Some(&index) = self.assigned.get(node) {
            return Err(ModelError::VisitedTwice { index });
        }

        let index = self.next_index;
        let parent_index = self.nearest_assigned_ancestor(node);
        let (parent_uid, parent_name) = match parent_index {
            Some(parent) => {
                let record = table
                    .get(parent)
                    .ok_or(ModelError::MissingParent { index, parent })?;
                (Some(record.uid), Some(record.display_name.clone()))
            }
            None => (None, None),
        };

        let (base_name, is_generated) = match node.identifiers().first() {
            Some(name) => (name.to_string(), false),
            None => (generated_name(index, parent_index), true),
        };
        let display_name = tag_name(&base_name, index, parent_index);

        self.assigned.insert(node.clone(), index);
        self.next_index += 1;

        Ok(Identity {
            index,
            uid: ElementUid::new(),
            base_name,
            is_generated,
            display_name,
            parent_index,
            parent_uid,
            parent_name,
        })
    }

    /// Walk up the syntax tree, skipping nodes that were never assigned.
    fn nearest_assigned_ancestor(&self, node: &N) -> Option<usize> {
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if let Some(&index) = self.assigned.get(&ancestor) {
                return Some(index);
            }
            current = ancestor.parent();
        }
        None
    }
}
