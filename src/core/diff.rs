//! Env diff engine.
//!
//! Classifies key-level changes between two env snapshots for history
//! views and pre-backup previews.

use crate::core::env::EnvMap;

/// Key-level differences between two env maps.
///
/// `added` and `changed` follow the iteration order of the newer map,
/// `removed` follows the older map. Keys with equal values in both maps
/// are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDiff {
    added: Vec<String>,
    removed: Vec<String>,
    changed: Vec<String>,
}

impl EnvDiff {
    /// Compute the diff between two snapshots.
    ///
    /// # Arguments
    ///
    /// * `before` - The older snapshot
    /// * `after` - The newer snapshot
    ///
    /// # Returns
    ///
    /// An `EnvDiff` with added, removed, and changed key names.
    pub fn compute(before: &EnvMap, after: &EnvMap) -> Self {
        let mut added = Vec::new();
        let mut changed = Vec::new();

        for (key, value) in after.iter() {
            match before.get(key) {
                None => added.push(key.to_string()),
                Some(previous) if previous != value => changed.push(key.to_string()),
                Some(_) => {}
            }
        }

        let removed = before
            .keys()
            .filter(|key| !after.contains_key(key))
            .map(str::to_string)
            .collect();

        Self {
            added,
            removed,
            changed,
        }
    }

    /// Keys present only in the newer snapshot.
    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// Keys present only in the older snapshot.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Keys present in both snapshots with differing values.
    pub fn changed(&self) -> &[String] {
        &self.changed
    }

    /// Whether the snapshots match key for key.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of differing keys.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}
