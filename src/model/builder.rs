//! Model Table Builder.
//!
//! One pre-order pass over the syntax tree. Every model-relevant node gets
//! identity, a qualified name, a classification, its literal fields and, for
//! relationship-shaped rules, a resolved target; the result is one
//! [`ElementRecord`] per node in a [`ModelTable`].

use tracing::{debug, info, warn};

use super::fqn::qualify;
use super::identity::IdentityAssigner;
use super::kind::{Classification, classify};
use super::resolve::{CONNECT_ROLES, MESSAGE_ROLES, NameIndex, Target, label_endpoints};
use super::{ElementKind, ElementRecord, ModelError, ModelTable, RelatedName};
use crate::base::Position;
use crate::parser::{Keyword, parse};
use crate::syntax::RuleNode;

/// Parse `source` and build its flat model table.
///
/// Any syntax error aborts the build with [`ModelError::Syntax`].
pub fn build_table(source: &str) -> Result<ModelTable, ModelError> {
    let parse = parse(source);
    if let Some(first) = parse.errors.first() {
        return Err(ModelError::Syntax {
            position: Position::of_offset(source, usize::from(first.range.start())),
            message: first.message.clone(),
            count: parse.errors.len(),
        });
    }
    TableBuilder::new().build(&parse.syntax())
}

/// Builder context threaded through one traversal.
///
/// Owns the index counter, the node side table and the growing table, so
/// two builds never share state.
#[derive(Debug)]
pub struct TableBuilder<N> {
    identity: IdentityAssigner<N>,
    names: NameIndex,
    table: ModelTable,
}

impl<N: RuleNode> Default for TableBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: RuleNode> TableBuilder<N> {
    pub fn new() -> Self {
        Self {
            identity: IdentityAssigner::new(),
            names: NameIndex::new(),
            table: ModelTable::new(),
        }
    }

    /// Walk the tree under `root` in pre-order and return the finished table.
    pub fn build(mut self, root: &N) -> Result<ModelTable, ModelError> {
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            if let Some(classification) = classify(node.rule_kind()) {
                self.visit(&node, classification)?;
            }
            // Reversed so the leftmost child is visited first
            stack.extend(node.children().into_iter().rev());
        }

        let dangling = self.table.iter().filter(|r| r.is_dangling()).count();
        info!(
            elements = self.table.len(),
            dangling, "built model table"
        );
        Ok(self.table)
    }

    /// Record one model-relevant node.
    fn visit(&mut self, node: &N, classification: Classification) -> Result<(), ModelError> {
        let identity = self.identity.assign(node, &self.table)?;
        let qualified = qualify(
            identity.index,
            &identity.display_name,
            identity.parent_index,
            &self.table,
        )?;

        let (related_index, related_name) = self.relate(node, &classification)?;
        if related_index.is_none()
            && related_name.is_none()
            && matches!(
                classification.kind,
                ElementKind::Specializes | ElementKind::Redefines | ElementKind::References
            )
        {
            warn!(
                element = %identity.display_name,
                rule = node.rule_kind(),
                "dangling reference"
            );
        }

        let record = ElementRecord {
            index: identity.index,
            uid: identity.uid,
            display_name: identity.display_name,
            parent_name: identity.parent_name,
            parent_index: identity.parent_index,
            parent_uid: identity.parent_uid,
            kind: classification.kind,
            rule_kind: node.rule_kind().to_string(),
            related_index,
            related_name,
            value_type: node.type_annotations().first().map(|t| t.to_string()),
            constant: node.constants().first().map(|c| c.to_string()),
            multiplicity: node.multiplicities().first().map(|m| m.to_string()),
            keywords: classification.keywords,
            fully_qualified_name: qualified.plain,
            fully_qualified_name_tagged: qualified.tagged,
            tree_depth: qualified.depth,
            comment_text: node.long_comments().first().map(|c| c.to_string()),
        };
        debug!(
            index = record.index,
            kind = %record.kind,
            name = %record.display_name,
            "recorded element"
        );

        if !identity.is_generated {
            self.names.record(&identity.base_name, record.index);
        }
        self.table.insert(record)
    }

    /// Relationship fields for a node, `(None, None)` when it has none.
    fn relate(
        &self,
        node: &N,
        classification: &Classification,
    ) -> Result<(Option<usize>, Option<RelatedName>), ModelError> {
        if classification.has(Keyword::Connect) || classification.kind == ElementKind::Connect {
            let endpoints = label_endpoints(CONNECT_ROLES, &node.endpoints());
            return Ok((None, Some(RelatedName::Endpoints(endpoints))));
        }
        if classification.kind == ElementKind::Message {
            let endpoints = label_endpoints(MESSAGE_ROLES, &node.endpoints());
            return Ok((None, Some(RelatedName::Endpoints(endpoints))));
        }

        let identifiers = node.identifiers();
        let referenced = if classification.has(Keyword::Redefines) {
            // A redefinition names the feature it redefines
            match identifiers.first() {
                Some(name) => Some(name.clone()),
                None => {
                    return Err(ModelError::UnnamedRelationTarget(
                        node.rule_kind().to_string(),
                    ));
                }
            }
        } else if classification.kind == ElementKind::References {
            identifiers
                .get(1)
                .cloned()
                .or_else(|| node.type_annotations().first().cloned())
        } else if classification.has(Keyword::Specializes) || classification.has(Keyword::About) {
            identifiers.get(1).cloned()
        } else {
            None
        };

        let Some(referenced) = referenced else {
            return Ok((None, None));
        };
        Ok(match self.names.resolve(&referenced, &self.table)? {
            Some(Target {
                display_name,
                index,
            }) => (Some(index), Some(RelatedName::Single(display_name))),
            None => (None, None),
        })
    }
}
