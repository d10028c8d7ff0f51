pub mod calendar;
pub mod file_compare;
pub mod history;
pub mod id_code;
pub mod insurance_age;
pub mod json_view;
pub mod scan_case;
pub mod url_analysis;

pub use crate::domain::model::{
    ComparisonRow, ComparisonStatus, FileEntry, QueryParam, ScanCaseResult, UrlAnalysis,
};
pub use crate::domain::ports::{ConfigProvider, HistoryEntry, Storage};
pub use crate::utils::error::Result;

/// Local time in the format shown next to history entries.
pub(crate) fn timestamp_now() -> String {
    chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}
