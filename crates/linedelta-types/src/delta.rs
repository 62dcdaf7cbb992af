//! Grouped regions of difference between two line sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The raw kind of a [`Delta`], as produced by grouping an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeltaKind {
    /// Lines present only in the target.
    Insert,
    /// Lines present only in the source.
    Delete,
    /// Source lines replaced by target lines.
    Change,
}

impl DeltaKind {
    /// The upper-case tag name (`INSERT`, `DELETE`, `CHANGE`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Delete => "DELETE",
            Self::Change => "CHANGE",
        }
    }
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One contiguous region of difference.
///
/// `source_lines` is exactly the source sequence at
/// `source_position .. source_position + source_lines.len()`, and likewise
/// for the target. For an [`Insert`](DeltaKind::Insert) `source_lines` is
/// empty and `source_position` is where the insertion lands in the source;
/// a [`Delete`](DeltaKind::Delete) mirrors this on the target side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub kind: DeltaKind,
    pub source_position: usize,
    pub source_lines: Vec<String>,
    pub target_position: usize,
    pub target_lines: Vec<String>,
}

impl Delta {
    /// Create a delta, deriving its kind from which sides carry lines.
    ///
    /// Returns `None` when both sides are empty: such a region is not a
    /// difference.
    pub fn from_sides(
        source_position: usize,
        source_lines: Vec<String>,
        target_position: usize,
        target_lines: Vec<String>,
    ) -> Option<Self> {
        let kind = match (source_lines.is_empty(), target_lines.is_empty()) {
            (true, true) => return None,
            (true, false) => DeltaKind::Insert,
            (false, true) => DeltaKind::Delete,
            (false, false) => DeltaKind::Change,
        };
        Some(Self {
            kind,
            source_position,
            source_lines,
            target_position,
            target_lines,
        })
    }

    /// Exclusive end of the source range.
    pub fn source_end(&self) -> usize {
        self.source_position + self.source_lines.len()
    }

    /// Exclusive end of the target range.
    pub fn target_end(&self) -> usize {
        self.target_position + self.target_lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn kind_follows_sides() {
        let ins = Delta::from_sides(1, vec![], 1, lines(&["x"])).unwrap();
        assert_eq!(ins.kind, DeltaKind::Insert);

        let del = Delta::from_sides(1, lines(&["x"]), 1, vec![]).unwrap();
        assert_eq!(del.kind, DeltaKind::Delete);

        let chg = Delta::from_sides(1, lines(&["x"]), 1, lines(&["y", "z"])).unwrap();
        assert_eq!(chg.kind, DeltaKind::Change);
        assert_eq!(chg.source_end(), 2);
        assert_eq!(chg.target_end(), 3);
    }

    #[test]
    fn empty_sides_are_not_a_delta() {
        assert!(Delta::from_sides(0, vec![], 0, vec![]).is_none());
    }

    #[test]
    fn tag_names() {
        assert_eq!(DeltaKind::Insert.to_string(), "INSERT");
        assert_eq!(DeltaKind::Delete.tag(), "DELETE");
        assert_eq!(DeltaKind::Change.tag(), "CHANGE");
    }

    #[test]
    fn kind_serializes_as_tag() {
        let json = serde_json::to_string(&DeltaKind::Change).unwrap();
        assert_eq!(json, "\"CHANGE\"");
    }
}
