//! Fully-Qualified Name Resolver.

use super::record::base_name;
use super::{ModelError, ModelTable};
use crate::base::constants::FQN_SEPARATOR;

/// Qualified names and depth of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QualifiedName {
    pub plain: String,
    pub tagged: String,
    pub depth: usize,
}

/// Qualify an element that is about to be recorded.
///
/// Starts from the element's own display name and follows `parent_index`
/// backlinks through `table` until a top-level record is reached.
pub(crate) fn qualify(
    index: usize,
    display_name: &str,
    parent_index: Option<usize>,
    table: &ModelTable,
) -> Result<QualifiedName, ModelError> {
    let mut tagged = vec![display_name.to_string()];
    let mut next = parent_index;
    while let Some(parent) = next {
        // A chain longer than the table means a cycle
        if tagged.len() > table.len() + 1 {
            return Err(ModelError::BrokenAncestry(index));
        }
        let record = table
            .get(parent)
            .ok_or(ModelError::MissingParent { index, parent })?;
        tagged.push(record.display_name.clone());
        next = record.parent_index;
    }
    tagged.reverse();

    let plain: Vec<&str> = tagged.iter().map(|name| base_name(name)).collect();
    Ok(QualifiedName {
        plain: plain.join(FQN_SEPARATOR),
        depth: tagged.len() - 1,
        tagged: tagged.join(FQN_SEPARATOR),
    })
}
