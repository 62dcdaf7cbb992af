use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use linedelta_diff::{render_with, summarize, summary_line};
use linedelta_types::{DiffReport, DiffSummary, LineSequence};

use crate::cache::{CacheStats, ComparisonCache};
use crate::config::LinedeltaConfig;
use crate::error::SdkResult;
use crate::source::{label_for, read_lines};

/// Structured result of one comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub report: DiffReport,
    pub summary: DiffSummary,
}

impl Comparison {
    pub fn from_report(report: DiffReport) -> Self {
        let summary = summarize(&report);
        Self { report, summary }
    }

    /// Returns `true` if the compared inputs are identical.
    pub fn is_identical(&self) -> bool {
        self.report.is_empty()
    }
}

/// Compares artifacts under one configuration, reusing earlier results
/// through an owned [`ComparisonCache`].
pub struct Comparator {
    config: LinedeltaConfig,
    cache: Option<ComparisonCache>,
}

impl Comparator {
    pub fn new(config: LinedeltaConfig) -> Self {
        let cache = (config.cache.capacity > 0).then(|| ComparisonCache::new(config.cache.capacity));
        Self { config, cache }
    }

    pub fn config(&self) -> &LinedeltaConfig {
        &self.config
    }

    /// Cache counters, or `None` when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ComparisonCache::stats)
    }

    /// Compare two labeled line sequences.
    pub fn compare(
        &mut self,
        source_label: &str,
        source: &LineSequence,
        target_label: &str,
        target: &LineSequence,
    ) -> Comparison {
        let report = match self.cache.as_mut() {
            Some(cache) => cache.get_or_compare(source_label, source, target_label, target),
            None => linedelta_diff::compare(source_label, source, target_label, target),
        };
        Comparison::from_report(report)
    }

    /// Read and compare two text files. Reports are labeled with file names.
    pub fn compare_files(&mut self, before: &Path, after: &Path) -> SdkResult<Comparison> {
        debug!(before = %before.display(), after = %after.display(), "comparing files");
        let source = read_lines(before)?;
        let target = read_lines(after)?;
        let comparison = self.compare(&label_for(before), &source, &label_for(after), &target);
        info!(
            before = %before.display(),
            after = %after.display(),
            additions = comparison.summary.additions,
            deletions = comparison.summary.deletions,
            modifications = comparison.summary.modifications,
            "compared files"
        );
        Ok(comparison)
    }

    /// Detailed report in the configured style.
    pub fn render(&self, report: &DiffReport) -> String {
        render_with(report, &self.config.report)
    }

    /// One-line summary in the configured locale.
    pub fn summary_line(&self, summary: &DiffSummary) -> String {
        summary_line(summary, self.config.report.locale)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(LinedeltaConfig::default())
    }
}
