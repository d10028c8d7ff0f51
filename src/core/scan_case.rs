//! 掃描案件檔名產生器。

use crate::core::{timestamp_now, HistoryEntry};
use crate::domain::model::ScanCaseResult;
use crate::utils::error::{Result, ToolError};

pub const DEFAULT_SUFFIXES: [&str; 6] = ["_NB006", "_NB007", "_NB011", "_NB015", "_AFI009", "_AFI010"];

pub fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

impl HistoryEntry for ScanCaseResult {
    const STORAGE_KEY: &'static str = "scanCaseHistory";

    fn history_key(&self) -> &str {
        &self.base_name
    }
}

pub fn generate_scan_case<S: AsRef<str>>(base_name: &str, suffixes: &[S]) -> Result<ScanCaseResult> {
    if base_name.trim().is_empty() {
        return Err(ToolError::EmptyInput {
            field: "案件名稱".to_string(),
        });
    }

    let generated_names = suffixes
        .iter()
        .map(|suffix| format!("{}{}", base_name, suffix.as_ref()))
        .collect();

    Ok(ScanCaseResult {
        base_name: base_name.to_string(),
        generated_names,
        timestamp: timestamp_now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_one_name_per_suffix() {
        let result = generate_scan_case("CASE123", &DEFAULT_SUFFIXES).unwrap();
        assert_eq!(result.generated_names.len(), 6);
        assert_eq!(result.generated_names[0], "CASE123_NB006");
        assert_eq!(result.generated_names[5], "CASE123_AFI010");
        assert!(result.joined().starts_with("CASE123_NB006\nCASE123_NB007\n"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = generate_scan_case("  ", &DEFAULT_SUFFIXES).unwrap_err();
        assert!(matches!(err, ToolError::EmptyInput { .. }));
    }
}
