//! The flat, index-keyed model table.

use indexmap::IndexMap;

use super::{ElementRecord, ModelError};

/// Every element record of one build, keyed by index.
///
/// The table is the sole hand-off between the table builder and the tree
/// assembler. Records keep insertion order, which for a built table is
/// ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelTable {
    records: IndexMap<usize, ElementRecord>,
}

impl ModelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, refusing a second record for the same index.
    pub fn insert(&mut self, record: ElementRecord) -> Result<(), ModelError> {
        if self.records.contains_key(&record.index) {
            return Err(ModelError::DuplicateIndex(record.index));
        }
        self.records.insert(record.index, record);
        Ok(())
    }

    /// Build a table from records, e.g. ones read back from an export.
    pub fn from_records(
        records: impl IntoIterator<Item = ElementRecord>,
    ) -> Result<Self, ModelError> {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    pub fn get(&self, index: usize) -> Option<&ElementRecord> {
        self.records.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.records.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ElementRecord> {
        self.records.values()
    }

    /// Records sorted by ascending index, whatever order they were inserted in.
    pub fn in_index_order(&self) -> Vec<&ElementRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by_key(|record| record.index);
        records
    }

    /// Query helper: the first record, in insertion order, whose base name
    /// equals `name`.
    ///
    /// This is a linear scan for consumers inspecting a finished table. The
    /// builder resolves references through its own name index while the
    /// table is still growing.
    pub fn find_by_base_name(&self, name: &str) -> Option<&ElementRecord> {
        let name = name.trim();
        self.iter().find(|record| record.base_name().trim() == name)
    }
}

impl<'a> IntoIterator for &'a ModelTable {
    type Item = &'a ElementRecord;
    type IntoIter = indexmap::map::Values<'a, usize, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
