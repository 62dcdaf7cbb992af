//! Effective delta kinds.
//!
//! A line diff often reports "the closing brace changed" when lines were
//! really appended just before it. [`reclassify`] recognizes exactly that
//! shape and reports it as an insertion. The stored delta is never touched;
//! only the kind used for display and counting differs.

use serde::{Deserialize, Serialize};

use linedelta_types::{Delta, DeltaKind};

/// The only line content treated as a structural closer (after trimming).
pub const STRUCTURAL_CLOSER: &str = "}";

/// How a delta is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Reported as grouped.
    AsGrouped(DeltaKind),
    /// A `CHANGE` whose single source line is a closer that reappears as the
    /// last target line. Reported as an insertion of everything before it.
    InsertBeforeCloser,
}

impl Classification {
    /// The kind used for labels, ranges, and counts.
    pub fn effective_kind(&self) -> DeltaKind {
        match self {
            Self::AsGrouped(kind) => *kind,
            Self::InsertBeforeCloser => DeltaKind::Insert,
        }
    }

    /// Returns `true` if the effective kind differs from the grouped kind.
    pub fn is_reclassified(&self) -> bool {
        matches!(self, Self::InsertBeforeCloser)
    }

    /// Target lines shown as added content. The closer of a reclassified
    /// delta is unchanged and therefore left out.
    pub fn shown_target_lines<'d>(&self, delta: &'d Delta) -> &'d [String] {
        let lines = delta.target_lines.as_slice();
        match self {
            Self::InsertBeforeCloser => &lines[..lines.len().saturating_sub(1)],
            Self::AsGrouped(_) => lines,
        }
    }
}

/// Returns `true` if the trimmed line is exactly [`STRUCTURAL_CLOSER`].
pub fn is_structural_closer(line: &str) -> bool {
    line.trim() == STRUCTURAL_CLOSER
}

/// Classify a single delta. Neighboring deltas are never consulted.
pub fn reclassify(delta: &Delta) -> Classification {
    let closes_before_insert = delta.kind == DeltaKind::Change
        && matches!(delta.source_lines.as_slice(), [only] if is_structural_closer(only))
        && delta.target_lines.len() > 1
        && delta.target_lines.last().is_some_and(|last| is_structural_closer(last));

    if closes_before_insert {
        Classification::InsertBeforeCloser
    } else {
        Classification::AsGrouped(delta.kind)
    }
}
