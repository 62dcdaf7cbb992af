//! Detailed human-readable reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use linedelta_types::{Delta, DeltaKind, DiffReport};

use crate::locale::{Locale, Vocabulary};
use crate::reclassify::{reclassify, Classification};

/// Presentation settings for rendered reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    /// Language of the fixed phrases.
    pub locale: Locale,
    /// Prefix of each removed line.
    pub removed_marker: String,
    /// Prefix of each added line.
    pub added_marker: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            removed_marker: "- ".into(),
            added_marker: "+ ".into(),
        }
    }
}

/// A report bound to a style, rendered through [`fmt::Display`].
pub struct Rendered<'a> {
    report: &'a DiffReport,
    style: &'a ReportStyle,
}

impl<'a> Rendered<'a> {
    pub fn new(report: &'a DiffReport, style: &'a ReportStyle) -> Self {
        Self { report, style }
    }

    fn write_delta(&self, f: &mut fmt::Formatter<'_>, words: &Vocabulary, delta: &Delta) -> fmt::Result {
        let class = reclassify(delta);
        let kind = class.effective_kind();

        writeln!(f, "{}{}", words.change_type, kind_label(words, kind))?;

        let (start, end) = line_range(delta, &class);
        writeln!(f, "{}{}{}{}", words.location, start, words.location_to, end)?;

        if !delta.source_lines.is_empty() && kind != DeltaKind::Insert {
            writeln!(f, "{}", words.source_content)?;
            write_block(f, &self.style.removed_marker, &delta.source_lines)?;
        }

        let shown = class.shown_target_lines(delta);
        if !shown.is_empty() {
            writeln!(f, "{}", words.target_content)?;
            write_block(f, &self.style.added_marker, shown)?;
        }

        writeln!(f)
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.style.locale.vocabulary();

        writeln!(f, "{}", words.header)?;
        writeln!(f, "{}{}", words.source_file, self.report.source_label)?;
        writeln!(f, "{}{}", words.target_file, self.report.target_label)?;
        writeln!(f)?;

        if self.report.is_empty() {
            return writeln!(f, "{}", words.no_difference);
        }

        for delta in &self.report.deltas {
            self.write_delta(f, words, delta)?;
        }
        Ok(())
    }
}

/// Render a report with the default style.
pub fn render(report: &DiffReport) -> String {
    render_with(report, &ReportStyle::default())
}

/// Render a report with the given style.
pub fn render_with(report: &DiffReport, style: &ReportStyle) -> String {
    Rendered::new(report, style).to_string()
}

/// Label of an effective kind.
pub fn kind_label(words: &Vocabulary, kind: DeltaKind) -> &'static str {
    match kind {
        DeltaKind::Insert => words.addition,
        DeltaKind::Delete => words.deletion,
        DeltaKind::Change => words.modification,
    }
}

/// 1-based inclusive line range of a delta. Insertions are located in the
/// target, everything else in the source.
pub fn line_range(delta: &Delta, class: &Classification) -> (usize, usize) {
    if class.effective_kind() == DeltaKind::Insert {
        (delta.target_position + 1, delta.target_end())
    } else {
        (delta.source_position + 1, delta.source_end())
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, marker: &str, lines: &[String]) -> fmt::Result {
    for line in lines {
        writeln!(f, "{marker}{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn report(deltas: Vec<Delta>) -> DiffReport {
        DiffReport::new("Old.java", "New.java", deltas)
    }

    #[test]
    fn no_difference() {
        let text = render(&report(vec![]));
        assert_eq!(
            text,
            "Comparing files:\nFile 1: Old.java\nFile 2: New.java\n\nNo differences between the files\n"
        );
    }

    #[test]
    fn deletion_block() {
        let delta = Delta::from_sides(1, lines(&["b"]), 1, vec![]).unwrap();
        let text = render(&report(vec![delta]));
        assert!(text.ends_with(
            "Change type: deletion\nLocation: lines 2 to 2\nFile 1 content:\n- b\n\n"
        ));
        assert!(!text.contains("File 2 content:"));
    }

    #[test]
    fn insertion_uses_target_range() {
        let delta = Delta::from_sides(3, vec![], 5, lines(&["x", "y"])).unwrap();
        let text = render(&report(vec![delta]));
        assert!(text.contains("Change type: addition\nLocation: lines 6 to 7\nFile 2 content:\n+ x\n+ y\n\n"));
        assert!(!text.contains("File 1 content:"));
    }

    #[test]
    fn modification_shows_both_blocks() {
        let delta = Delta::from_sides(0, lines(&["old"]), 0, lines(&["new", "newer"])).unwrap();
        let text = render(&report(vec![delta]));
        assert!(text.contains(
            "Change type: modification\nLocation: lines 1 to 1\nFile 1 content:\n- old\nFile 2 content:\n+ new\n+ newer\n\n"
        ));
    }

    #[test]
    fn reclassified_change_hides_closer() {
        let delta = Delta::from_sides(1, lines(&["}"]), 1, lines(&["int x;", "}"])).unwrap();
        let text = render(&report(vec![delta]));
        assert!(text.contains("Change type: addition\nLocation: lines 2 to 3\nFile 2 content:\n+ int x;\n\n"));
        assert!(!text.contains("+ }"));
        assert!(!text.contains("- }"));
    }

    #[test]
    fn deltas_are_separated_by_blank_lines() {
        let first = Delta::from_sides(0, lines(&["a"]), 0, vec![]).unwrap();
        let second = Delta::from_sides(3, vec![], 2, lines(&["z"])).unwrap();
        let text = render(&report(vec![first, second]));
        assert!(text.contains("- a\n\nChange type: addition"));
        assert_eq!(text.matches("Change type:").count(), 2);
    }

    #[test]
    fn custom_markers_and_locale() {
        let style = ReportStyle {
            locale: Locale::TraditionalChinese,
            removed_marker: "< ".into(),
            added_marker: "> ".into(),
        };
        let delta = Delta::from_sides(0, lines(&["a"]), 0, lines(&["b"])).unwrap();
        let text = render_with(&report(vec![delta]), &style);
        assert!(text.starts_with("比較檔案:\n檔案1: Old.java\n檔案2: New.java\n\n"));
        assert!(text.contains("變更類型: 修改\n位置: 行 1 到 1\n檔案1 內容:\n< a\n檔案2 內容:\n> b\n"));
    }

    #[test]
    fn chinese_no_difference() {
        let style = ReportStyle { locale: Locale::TraditionalChinese, ..ReportStyle::default() };
        assert!(render_with(&report(vec![]), &style).ends_with("檔案之間沒有差異\n"));
    }
}
