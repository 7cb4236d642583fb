//! Cross-Reference Resolver.
//!
//! Single targets (specializes, redefines, references) are looked up by base
//! name among the records built so far. Connect and message constructs get a
//! list of role-labelled endpoint strings instead.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::record::is_generated_name;
use super::{ModelError, ModelTable};
use crate::base::constants::{
    ENDPOINT_SEPARATOR, FROM_LABEL, OF_LABEL, SOURCE_LABEL, TARGET_LABEL, TO_LABEL,
};

/// Role labels of a connect's endpoints.
pub(crate) const CONNECT_ROLES: &[&str] = &[SOURCE_LABEL, TARGET_LABEL];

/// Role labels of a message's participants.
pub(crate) const MESSAGE_ROLES: &[&str] = &[OF_LABEL, FROM_LABEL, TO_LABEL];

/// A resolved single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub display_name: String,
    pub index: usize,
}

/// Base name to index of the first named record carrying it.
#[derive(Debug, Default)]
pub(crate) struct NameIndex {
    by_base: FxHashMap<SmolStr, usize>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a named element. Earlier records win on duplicate names.
    ///
    /// Callers skip elements whose base name was synthesized.
    pub fn record(&mut self, base_name: &str, index: usize) {
        self.by_base
            .entry(SmolStr::new(base_name.trim()))
            .or_insert(index);
    }

    /// Resolve a referenced name.
    ///
    /// `Ok(None)` is a dangling reference, which is a valid outcome.
    pub fn resolve(&self, name: &str, table: &ModelTable) -> Result<Option<Target>, ModelError> {
        if is_generated_name(name) {
            return Err(ModelError::UnnamedRelationTarget(name.to_string()));
        }
        let Some(&index) = self.by_base.get(name.trim()) else {
            return Ok(None);
        };
        Ok(table.get(index).map(|record| Target {
            display_name: record.display_name.clone(),
            index,
        }))
    }
}

/// Format endpoint expressions as `"<Role>: a.b"` strings, pairing roles in order.
pub(crate) fn label_endpoints(roles: &[&str], endpoints: &[Vec<SmolStr>]) -> Vec<String> {
    roles
        .iter()
        .zip(endpoints)
        .map(|(role, segments)| {
            let path: Vec<&str> = segments.iter().map(SmolStr::as_str).collect();
            format!("{role}: {}", path.join(ENDPOINT_SEPARATOR))
        })
        .collect()
}
