//! High-level API for linedelta.
//!
//! Wraps the pure diff engine with the pieces a caller needs around it:
//! reading files, loading configuration, caching repeated comparisons, and
//! comparing whole directory snapshots.
//!
//! # Key Types
//!
//! - [`Comparator`] — Configured entry point with an owned cache
//! - [`Comparison`] — Report plus summary of one comparison
//! - [`LinedeltaConfig`] — TOML-backed configuration
//! - [`ComparisonCache`] — Fingerprint-keyed report cache
//! - [`FilePair`] / [`DirectoryPairing`] — Batch inputs

pub mod batch;
pub mod cache;
pub mod comparator;
pub mod config;
pub mod error;
pub mod source;

pub use batch::{compare_batch, compare_pair, pair_directories, DirectoryPairing, FilePair};
pub use cache::{CacheStats, ComparisonCache};
pub use comparator::{Comparator, Comparison};
pub use config::{BatchConfig, CacheConfig, LinedeltaConfig};
pub use error::{SdkError, SdkResult};
pub use source::{label_for, read_lines};
