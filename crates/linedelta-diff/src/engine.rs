//! Line-level edit scripts.
//!
//! A forward greedy Myers O(N·D) search with a recorded trace: at every
//! cost the furthest-reaching point of each diagonal is kept, and the script
//! is recovered by walking the trace backwards. Lines compare by exact string
//! equality; nothing is trimmed or normalized here.
//!
//! Scripts that cost more than [`MAX_TRACED_COST`] edits fall back to the
//! linear-space Myers of the `similar` crate, driven through a [`DiffHook`].

use std::convert::Infallible;

use similar::algorithms::{myers, DiffHook};
use tracing::debug;

use linedelta_types::LineSequence;

/// Largest edit cost searched with a full trace. The trace grows with the
/// square of the cost.
pub const MAX_TRACED_COST: usize = 2048;

/// One step of an edit script.
///
/// Every operation carries its position in both sequences: the index of the
/// line it refers to on its own side, and the current cursor on the other
/// side. Lines are borrowed from the compared sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOperation<'a> {
    /// The line is present in both sequences.
    Keep {
        source_index: usize,
        target_index: usize,
        line: &'a str,
    },
    /// The line exists only in the source.
    Delete {
        source_index: usize,
        target_index: usize,
        line: &'a str,
    },
    /// The line exists only in the target.
    Insert {
        source_index: usize,
        target_index: usize,
        line: &'a str,
    },
}

impl<'a> EditOperation<'a> {
    /// Returns `true` for [`Keep`](Self::Keep).
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep { .. })
    }

    /// Position in the source sequence.
    pub fn source_index(&self) -> usize {
        match *self {
            Self::Keep { source_index, .. }
            | Self::Delete { source_index, .. }
            | Self::Insert { source_index, .. } => source_index,
        }
    }

    /// Position in the target sequence.
    pub fn target_index(&self) -> usize {
        match *self {
            Self::Keep { target_index, .. }
            | Self::Delete { target_index, .. }
            | Self::Insert { target_index, .. } => target_index,
        }
    }

    /// The line this operation keeps, deletes, or inserts.
    pub fn line(&self) -> &'a str {
        match *self {
            Self::Keep { line, .. } | Self::Delete { line, .. } | Self::Insert { line, .. } => line,
        }
    }
}

/// Records Myers callbacks as per-line operations.
struct ScriptRecorder<'a> {
    source: &'a [String],
    target: &'a [String],
    ops: Vec<EditOperation<'a>>,
}

impl<'a> DiffHook for ScriptRecorder<'a> {
    type Error = Infallible;

    fn equal(&mut self, old_index: usize, new_index: usize, len: usize) -> Result<(), Infallible> {
        let source = self.source;
        for offset in 0..len {
            self.ops.push(EditOperation::Keep {
                source_index: old_index + offset,
                target_index: new_index + offset,
                line: &source[old_index + offset],
            });
        }
        Ok(())
    }

    fn delete(&mut self, old_index: usize, old_len: usize, new_index: usize) -> Result<(), Infallible> {
        let source = self.source;
        for source_index in old_index..old_index + old_len {
            self.ops.push(EditOperation::Delete {
                source_index,
                target_index: new_index,
                line: &source[source_index],
            });
        }
        Ok(())
    }

    fn insert(&mut self, old_index: usize, new_index: usize, new_len: usize) -> Result<(), Infallible> {
        let target = self.target;
        for target_index in new_index..new_index + new_len {
            self.ops.push(EditOperation::Insert {
                source_index: old_index,
                target_index,
                line: &target[target_index],
            });
        }
        Ok(())
    }
}

/// Compute a minimal edit script turning `source` into `target`.
///
/// The script visits every source and target line exactly once, in order.
/// Among equally short scripts the earliest common lines stay matched:
/// deletions are taken before insertions and edits are pushed as late as the
/// matching allows, the way GNU diff and git line up ambiguous input. For
/// `["c", "a", "a", "b", "c", "c"]` against `["a"]` the first `a` is kept.
/// The result is deterministic for equal inputs.
pub fn diff<'a>(source: &'a LineSequence, target: &'a LineSequence) -> Vec<EditOperation<'a>> {
    let old = source.as_slice();
    let new = target.as_slice();
    match forward_trace(old, new, MAX_TRACED_COST) {
        Some(trace) => backtrack(old, new, &trace),
        None => {
            debug!(
                source_lines = old.len(),
                target_lines = new.len(),
                "edit cost exceeds traced limit, bisecting"
            );
            bisect(old, new)
        }
    }
}

/// Runs the greedy search and returns one row per cost `d`, holding the
/// furthest source index reached on diagonals `-d - 1..=d + 1` before that
/// round. `None` once the cost passes `limit`.
fn forward_trace(old: &[String], new: &[String], limit: usize) -> Option<Vec<Vec<usize>>> {
    let (n, m) = (old.len(), new.len());
    let max = (n + m).min(limit);
    let offset = max as isize + 1;
    let mut frontier = vec![0usize; 2 * max + 3];
    let mut trace = Vec::new();

    for d in 0..=max as isize {
        trace.push(frontier[(offset - d - 1) as usize..=(offset + d + 1) as usize].to_vec());
        for k in (-d..=d).step_by(2) {
            let at = (offset + k) as usize;
            let mut x = if k == -d || (k != d && frontier[at - 1] < frontier[at + 1]) {
                frontier[at + 1]
            } else {
                frontier[at - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            frontier[at] = x;
            if x >= n && y >= m {
                return Some(trace);
            }
        }
    }
    None
}

fn backtrack<'a>(old: &'a [String], new: &'a [String], trace: &[Vec<usize>]) -> Vec<EditOperation<'a>> {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let (mut x, mut y) = (old.len(), new.len());

    for (d, row) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let furthest = |k: isize| row[(k + d + 1) as usize];
        let (prev_x, prev_y, inserted) = if d == 0 {
            (0, 0, false)
        } else {
            let k = x as isize - y as isize;
            let inserted = k == -d || (k != d && furthest(k - 1) < furthest(k + 1));
            let prev_k = if inserted { k + 1 } else { k - 1 };
            let prev_x = furthest(prev_k);
            (prev_x, (prev_x as isize - prev_k) as usize, inserted)
        };

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            ops.push(EditOperation::Keep { source_index: x, target_index: y, line: &old[x] });
        }
        if d == 0 {
            break;
        }
        if inserted {
            y -= 1;
            ops.push(EditOperation::Insert { source_index: x, target_index: y, line: &new[y] });
        } else {
            x -= 1;
            ops.push(EditOperation::Delete { source_index: x, target_index: y, line: &old[x] });
        }
    }

    ops.reverse();
    ops
}

fn bisect<'a>(old: &'a [String], new: &'a [String]) -> Vec<EditOperation<'a>> {
    let mut recorder = ScriptRecorder {
        source: old,
        target: new,
        ops: Vec::with_capacity(old.len().max(new.len())),
    };
    match myers::diff(&mut recorder, old, 0..old.len(), new, 0..new.len()) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    recorder.ops
}

/// Number of non-keep operations in a script.
pub fn edit_distance(ops: &[EditOperation<'_>]) -> usize {
    ops.iter().filter(|op| !op.is_keep()).count()
}
