//! Caller-owned cache of comparison results.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use linedelta_types::{DiffReport, Fingerprint, LineSequence};

/// Hit/miss counters of a [`ComparisonCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded map from an input-pair [`Fingerprint`] to its [`DiffReport`].
///
/// Oldest entries are evicted first once `capacity` is exceeded. A hit
/// returns the cached deltas under the labels of the current request.
#[derive(Debug)]
pub struct ComparisonCache {
    capacity: usize,
    entries: HashMap<Fingerprint, DiffReport>,
    order: VecDeque<Fingerprint>,
    hits: u64,
    misses: u64,
}

impl ComparisonCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    /// Look up a cached report. Counts a hit or a miss.
    pub fn get(&mut self, key: &Fingerprint) -> Option<&DiffReport> {
        match self.entries.get(key) {
            Some(report) => {
                self.hits += 1;
                Some(report)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a report, evicting the oldest entries beyond capacity.
    pub fn insert(&mut self, key: Fingerprint, report: DiffReport) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key, report).is_none() {
            self.order.push_back(key);
        }
        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    debug!(fingerprint = %oldest.short_hex(), "evicted cached comparison");
                }
                None => break,
            }
        }
    }

    /// Return the cached report for this input pair, or compute and cache it.
    pub fn get_or_compare(
        &mut self,
        source_label: &str,
        source: &LineSequence,
        target_label: &str,
        target: &LineSequence,
    ) -> DiffReport {
        let key = Fingerprint::of_pair(source, target);
        if let Some(report) = self.get(&key) {
            return report.clone().relabel(source_label, target_label);
        }
        let report = linedelta_diff::compare(source_label, source, target_label, target);
        self.insert(key, report.clone());
        report
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
