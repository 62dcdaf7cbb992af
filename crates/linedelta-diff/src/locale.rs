//! Report wording.

use serde::{Deserialize, Serialize};

/// Language of rendered reports and summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Locale {
    /// The vocabulary for this locale.
    pub fn vocabulary(&self) -> &'static Vocabulary {
        match self {
            Self::English => &ENGLISH,
            Self::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

/// Fixed phrases used by the reporter.
#[derive(Debug)]
pub struct Vocabulary {
    pub header: &'static str,
    pub source_file: &'static str,
    pub target_file: &'static str,
    pub no_difference: &'static str,
    pub change_type: &'static str,
    pub addition: &'static str,
    pub deletion: &'static str,
    pub modification: &'static str,
    pub location: &'static str,
    pub location_to: &'static str,
    pub source_content: &'static str,
    pub target_content: &'static str,
    pub summary: &'static str,
    pub lines_added: &'static str,
    pub lines_deleted: &'static str,
    pub lines_modified: &'static str,
    pub no_changes: &'static str,
    pub summary_separator: &'static str,
}

pub static ENGLISH: Vocabulary = Vocabulary {
    header: "Comparing files:",
    source_file: "File 1: ",
    target_file: "File 2: ",
    no_difference: "No differences between the files",
    change_type: "Change type: ",
    addition: "addition",
    deletion: "deletion",
    modification: "modification",
    location: "Location: lines ",
    location_to: " to ",
    source_content: "File 1 content:",
    target_content: "File 2 content:",
    summary: "Diff summary: ",
    lines_added: "line(s) added",
    lines_deleted: "line(s) deleted",
    lines_modified: "line(s) modified",
    no_changes: "no changes",
    summary_separator: ", ",
};

pub static TRADITIONAL_CHINESE: Vocabulary = Vocabulary {
    header: "比較檔案:",
    source_file: "檔案1: ",
    target_file: "檔案2: ",
    no_difference: "檔案之間沒有差異",
    change_type: "變更類型: ",
    addition: "新增",
    deletion: "刪除",
    modification: "修改",
    location: "位置: 行 ",
    location_to: " 到 ",
    source_content: "檔案1 內容:",
    target_content: "檔案2 內容:",
    summary: "檔案差異摘要: ",
    lines_added: "行新增",
    lines_deleted: "行刪除",
    lines_modified: "行修改",
    no_changes: "無變更",
    summary_separator: " ",
};
