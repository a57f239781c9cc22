use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::finding::Finding;

/// One "ignore all issues for this column" decision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OverrideKey {
    pub sheet: String,
    pub column: String,
}

impl OverrideKey {
    pub fn new(sheet: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            column: column.into(),
        }
    }
}

/// The set of columns the user has marked as overridden.
///
/// Owned by the presentation layer and passed by reference into aggregation;
/// the engine never mutates it. Purely a view-layer annotation: findings are
/// unaffected, only their weight in the aggregate changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSet {
    keys: BTreeSet<OverrideKey>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: OverrideKey) -> bool {
        self.keys.insert(key)
    }

    pub fn remove(&mut self, key: &OverrideKey) -> bool {
        self.keys.remove(key)
    }

    /// Flip one checkbox; returns the new state.
    pub fn toggle(&mut self, key: OverrideKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, sheet: &str, column: &str) -> bool {
        // BTreeSet lookup needs an owned key; the set stays small in practice.
        self.keys
            .iter()
            .any(|key| key.sheet == sheet && key.column == column)
    }

    pub fn covers(&self, finding: &Finding) -> bool {
        self.contains(&finding.sheet, &finding.column)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverrideKey> {
        self.keys.iter()
    }
}
