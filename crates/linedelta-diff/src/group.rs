//! Grouping of edit scripts into typed deltas.

use linedelta_types::Delta;

use crate::engine::EditOperation;

/// A run of consecutive non-keep operations being collected.
struct Run {
    source_position: usize,
    target_position: usize,
    source_lines: Vec<String>,
    target_lines: Vec<String>,
}

impl Run {
    fn starting_at(op: &EditOperation<'_>) -> Self {
        Self {
            source_position: op.source_index(),
            target_position: op.target_index(),
            source_lines: Vec::new(),
            target_lines: Vec::new(),
        }
    }

    fn finish(self) -> Option<Delta> {
        Delta::from_sides(
            self.source_position,
            self.source_lines,
            self.target_position,
            self.target_lines,
        )
    }
}

/// Collapse maximal runs of non-keep operations into deltas.
///
/// A keep always closes the current run. A run of only deletions becomes a
/// `DELETE`, only insertions an `INSERT`, and any mix a `CHANGE` whose lines
/// keep their original order on each side. A script with no edits yields no
/// deltas.
pub fn group(ops: &[EditOperation<'_>]) -> Vec<Delta> {
    let mut deltas = Vec::new();
    let mut run: Option<Run> = None;

    for op in ops {
        match *op {
            EditOperation::Keep { .. } => {
                if let Some(done) = run.take() {
                    deltas.extend(done.finish());
                }
            }
            EditOperation::Delete { line, .. } => {
                run.get_or_insert_with(|| Run::starting_at(op))
                    .source_lines
                    .push(line.to_owned());
            }
            EditOperation::Insert { line, .. } => {
                run.get_or_insert_with(|| Run::starting_at(op))
                    .target_lines
                    .push(line.to_owned());
            }
        }
    }
    if let Some(done) = run {
        deltas.extend(done.finish());
    }

    deltas
}
