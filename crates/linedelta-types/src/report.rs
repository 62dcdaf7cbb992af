use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::delta::Delta;

/// The structured result of comparing two artifacts.
///
/// The labels identify what was compared (usually file names); the report
/// does not own the compared content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Label of the "before" artifact.
    pub source_label: String,
    /// Label of the "after" artifact.
    pub target_label: String,
    /// Deltas in increasing position order.
    pub deltas: Vec<Delta>,
}

impl DiffReport {
    /// Create a report.
    pub fn new(
        source_label: impl Into<String>,
        target_label: impl Into<String>,
        deltas: Vec<Delta>,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            target_label: target_label.into(),
            deltas,
        }
    }

    /// Returns `true` if the compared artifacts are identical.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Number of deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// The same deltas under different labels.
    pub fn relabel(mut self, source_label: impl Into<String>, target_label: impl Into<String>) -> Self {
        self.source_label = source_label.into();
        self.target_label = target_label.into();
        self
    }
}

/// Line counts of a comparison, by effective delta kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSummary {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
}

impl DiffSummary {
    /// Returns `true` if every count is zero.
    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.deletions == 0 && self.modifications == 0
    }
}

impl AddAssign for DiffSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.additions += rhs.additions;
        self.deletions += rhs.deletions;
        self.modifications += rhs.modifications;
    }
}
