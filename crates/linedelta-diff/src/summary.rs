//! Numeric change summaries.

use linedelta_types::{DeltaKind, DiffReport, DiffSummary};

use crate::locale::Locale;
use crate::reclassify::reclassify;

/// Count changed lines by effective delta kind.
///
/// - insertions add their target lines, minus the unchanged closer of a
///   reclassified change
/// - deletions add their source lines
/// - changes add the longer of their two sides
pub fn summarize(report: &DiffReport) -> DiffSummary {
    let mut summary = DiffSummary::default();
    for delta in &report.deltas {
        let class = reclassify(delta);
        match class.effective_kind() {
            DeltaKind::Insert => {
                summary.additions += class.shown_target_lines(delta).len();
            }
            DeltaKind::Delete => summary.deletions += delta.source_lines.len(),
            DeltaKind::Change => {
                summary.modifications += delta.source_lines.len().max(delta.target_lines.len());
            }
        }
    }
    summary
}

/// One-line wording of a summary. Zero counts are omitted; an all-zero
/// summary reads "no changes".
pub fn summary_line(summary: &DiffSummary, locale: Locale) -> String {
    let words = locale.vocabulary();
    let parts: Vec<String> = [
        (summary.additions, words.lines_added),
        (summary.deletions, words.lines_deleted),
        (summary.modifications, words.lines_modified),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, unit)| format!("{count} {unit}"))
    .collect();

    if parts.is_empty() {
        format!("{}{}", words.summary, words.no_changes)
    } else {
        format!("{}{}", words.summary, parts.join(words.summary_separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linedelta_types::Delta;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn report(deltas: Vec<Delta>) -> DiffReport {
        DiffReport::new("a", "b", deltas)
    }

    #[test]
    fn empty_report_is_all_zero() {
        let summary = summarize(&report(vec![]));
        assert!(summary.is_empty());
        assert_eq!(summary_line(&summary, Locale::English), "Diff summary: no changes");
    }

    #[test]
    fn reclassified_change_counts_one_addition() {
        let delta = Delta::from_sides(1, lines(&["}"]), 1, lines(&["int x;", "}"])).unwrap();
        assert_eq!(
            summarize(&report(vec![delta])),
            DiffSummary { additions: 1, deletions: 0, modifications: 0 }
        );
    }

    #[test]
    fn plain_insert_counts_every_line() {
        let delta = Delta::from_sides(0, vec![], 0, lines(&["void f() {", "}"])).unwrap();
        assert_eq!(summarize(&report(vec![delta])).additions, 2);
    }

    #[test]
    fn non_triggering_change_is_a_modification() {
        let delta = Delta::from_sides(0, lines(&["}"]), 0, lines(&["};"])).unwrap();
        assert_eq!(
            summarize(&report(vec![delta])),
            DiffSummary { additions: 0, deletions: 0, modifications: 1 }
        );
    }

    #[test]
    fn change_counts_longer_side() {
        let delta = Delta::from_sides(0, lines(&["a", "b", "c"]), 0, lines(&["x"])).unwrap();
        assert_eq!(summarize(&report(vec![delta])).modifications, 3);
    }

    #[test]
    fn mixed_report() {
        let deltas = vec![
            Delta::from_sides(0, lines(&["a", "b"]), 0, vec![]).unwrap(),
            Delta::from_sides(4, vec![], 2, lines(&["n1", "n2", "n3"])).unwrap(),
            Delta::from_sides(7, lines(&["m"]), 8, lines(&["M", "MM"])).unwrap(),
        ];
        let summary = summarize(&report(deltas));
        assert_eq!(summary, DiffSummary { additions: 3, deletions: 2, modifications: 2 });
        assert_eq!(
            summary_line(&summary, Locale::English),
            "Diff summary: 3 line(s) added, 2 line(s) deleted, 2 line(s) modified"
        );
        assert_eq!(
            summary_line(&summary, Locale::TraditionalChinese),
            "檔案差異摘要: 3 行新增 2 行刪除 2 行修改"
        );
    }

    #[test]
    fn zero_counts_are_omitted() {
        let summary = DiffSummary { additions: 0, deletions: 4, modifications: 0 };
        assert_eq!(summary_line(&summary, Locale::English), "Diff summary: 4 line(s) deleted");
    }

    #[test]
    fn all_zero_matches_no_delta_wording() {
        let zero = DiffSummary::default();
        assert_eq!(
            summary_line(&zero, Locale::TraditionalChinese),
            summary_line(&summarize(&report(vec![])), Locale::TraditionalChinese)
        );
        assert_eq!(summary_line(&zero, Locale::TraditionalChinese), "檔案差異摘要: 無變更");
    }
}
