//! Read-side projections returned to callers.

use serde::{Deserialize, Serialize};

use super::Class;

/// Projection of a class state. `general_class` and `none_class` are sorted
/// lexicographically; class properties keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub class1: Class,
    pub class2: Class,
    pub general_class: Vec<String>,
    pub none_class: Vec<String>,
}

impl Snapshot {
    /// True when neither class has been named yet.
    pub fn is_uninitialized(&self) -> bool {
        self.class1.name.is_empty() && self.class2.name.is_empty()
    }
}

/// Result of classifying one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyOutcome {
    /// Name of the winning class, empty on a tie or when nothing matched.
    pub guess: String,
    pub reason: String,
    /// Sorted.
    pub known_hits: Vec<String>,
    /// Sorted query properties not known to any class or to general.
    pub unknown: Vec<String>,
    pub recommendation: String,
}

impl ClassifyOutcome {
    pub fn is_decisive(&self) -> bool {
        !self.guess.is_empty()
    }
}
