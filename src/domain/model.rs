use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

/// 網址分析結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysis {
    pub original_url: String,
    pub transformed_url: String,
    pub params: Vec<QueryParam>,
    pub timestamp: String,
    pub display_text: String,
    #[serde(default)]
    pub notes: String,
}

/// 掃描案件檔名產生結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCaseResult {
    pub base_name: String,
    pub generated_names: Vec<String>,
    pub timestamp: String,
}

impl ScanCaseResult {
    /// All generated names, one per line.
    pub fn joined(&self) -> String {
        self.generated_names.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStatus {
    Increased,
    Decreased,
    Unchanged,
    Deleted,
    Added,
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComparisonStatus::Increased => "增加",
            ComparisonStatus::Decreased => "減少",
            ComparisonStatus::Unchanged => "相同",
            ComparisonStatus::Deleted => "刪除",
            ComparisonStatus::Added => "新增",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub name: String,
    pub original_size: Option<u64>,
    pub modified_size: Option<u64>,
    pub difference: Option<i64>,
    pub status: ComparisonStatus,
}
