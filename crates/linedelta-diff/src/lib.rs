//! Line-oriented diff engine for linedelta.
//!
//! Turns two [`LineSequence`]s into a [`DiffReport`] and renders it. The
//! pipeline runs strictly in one direction:
//!
//! 1. [`diff`] — minimal edit script (Myers)
//! 2. [`group`] — typed deltas (`INSERT`, `DELETE`, `CHANGE`)
//! 3. [`reclassify`] — effective kind of each delta
//! 4. [`render`] / [`summarize`] — detailed report and line counts
//!
//! Everything here is pure and synchronous. Comparisons share no state and
//! can run in parallel.

pub mod engine;
pub mod group;
pub mod locale;
pub mod reclassify;
pub mod render;
pub mod summary;

use tracing::debug;

use linedelta_types::{DiffReport, LineSequence};

pub use engine::{diff, edit_distance, EditOperation};
pub use group::group;
pub use locale::{Locale, Vocabulary};
pub use reclassify::{is_structural_closer, reclassify, Classification, STRUCTURAL_CLOSER};
pub use render::{render, render_with, Rendered, ReportStyle};
pub use summary::{summarize, summary_line};

/// Compare two labeled line sequences.
pub fn compare(
    source_label: &str,
    source: &LineSequence,
    target_label: &str,
    target: &LineSequence,
) -> DiffReport {
    let ops = diff(source, target);
    let deltas = group(&ops);
    debug!(
        source = source_label,
        target = target_label,
        source_lines = source.len(),
        target_lines = target.len(),
        edits = edit_distance(&ops),
        deltas = deltas.len(),
        "compared line sequences"
    );
    DiffReport::new(source_label, target_label, deltas)
}
