//! Data model for linedelta.
//!
//! Every other linedelta crate depends on `linedelta-types`. The types here
//! are built fresh for each comparison and never shared mutably.
//!
//! # Key Types
//!
//! - [`LineSequence`] — Immutable, 0-indexed sequence of lines
//! - [`Delta`] / [`DeltaKind`] — One contiguous region of difference
//! - [`DiffReport`] — Ordered deltas plus the labels of both compared artifacts
//! - [`DiffSummary`] — Addition/deletion/modification counts
//! - [`Fingerprint`] — BLAKE3 digest of an input pair, used as a cache key

pub mod delta;
pub mod fingerprint;
pub mod lines;
pub mod report;

pub use delta::{Delta, DeltaKind};
pub use fingerprint::Fingerprint;
pub use lines::LineSequence;
pub use report::{DiffReport, DiffSummary};
