use crate::core::calendar::Calendar;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("ID code has an invalid shape: {code}")]
    InvalidShape { code: String },

    #[error("ID code checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("Unknown region letter: {region}")]
    InvalidRegion { region: String },

    #[error("Unknown gender digit: {value}")]
    InvalidGender { value: String },

    #[error("Invalid {calendar} date format (expected e.g. {hint})")]
    InvalidDateFormat {
        calendar: Calendar,
        hint: &'static str,
    },

    #[error("Birth date {birth} is later than calculation date {on}")]
    BirthAfterCalculationDate {
        birth: chrono::NaiveDate,
        on: chrono::NaiveDate,
    },

    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Input cannot be empty: {field}")]
    EmptyInput { field: String },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("No files selected for comparison")]
    NoFilesSelected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::IoError(_) | ToolError::SerializationError(_) | ToolError::CsvError(_) => {
                ErrorCategory::Storage
            }
            ToolError::ConfigValidationError { .. } | ToolError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            _ => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤：重新輸入即可
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 顯示給使用者的訊息（沿用工具介面的用語）
    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::InvalidShape { .. } | ToolError::ChecksumMismatch { .. } => {
                "無效的身分證字號".to_string()
            }
            ToolError::InvalidRegion { region } => format!("無效的縣市代碼: {}", region),
            ToolError::InvalidGender { value } => format!("無效的性別代碼: {}", value),
            ToolError::InvalidDateFormat { calendar, hint } => {
                format!("{}日期格式不正確 (例如: {})", calendar.label(), hint)
            }
            ToolError::BirthAfterCalculationDate { .. } => {
                "請確認出生日期不可晚於計算日期。".to_string()
            }
            ToolError::InvalidUrl { .. } => "無法解析網址，請確認格式是否正確".to_string(),
            ToolError::EmptyInput { field } => format!("請輸入{}", field),
            ToolError::InvalidJson { message } => format!("無效的 JSON 格式: {}", message),
            ToolError::NoFilesSelected => "請至少選擇一組檔案進行比對。".to_string(),
            ToolError::IoError(e) => format!("檔案存取失敗: {}", e),
            ToolError::SerializationError(e) => format!("歷史紀錄格式錯誤: {}", e),
            ToolError::CsvError(e) => format!("CSV 輸出失敗: {}", e),
            ToolError::ConfigValidationError { field, message } => {
                format!("設定檔錯誤 ({}): {}", field, message)
            }
            ToolError::InvalidConfigValueError { field, value, reason } => {
                format!("設定值無效 {} = '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ToolError::InvalidShape { .. } => "格式應為 1 個大寫英文字母加 9 個數字，例如 A123456789",
            ToolError::ChecksumMismatch { .. } => "請確認最後一碼檢查碼是否輸入正確",
            ToolError::InvalidRegion { .. } => "使用 `id regions` 查看可用的縣市代碼",
            ToolError::InvalidGender { .. } => "性別代碼請使用 1 (男) 或 2 (女)",
            ToolError::InvalidDateFormat { .. } => "請依照 年/月/日 格式輸入有效日期",
            ToolError::BirthAfterCalculationDate { .. } => "請調整出生日期或計算日期",
            ToolError::InvalidUrl { .. } => "請輸入以 https:// 開頭的完整網址",
            ToolError::EmptyInput { .. } => "請提供非空白的輸入內容",
            ToolError::InvalidJson { .. } => "請檢查 JSON 的括號、引號與逗號",
            ToolError::NoFilesSelected => "請指定含有檔案的原始或修改後目錄",
            ToolError::IoError(_) => "請確認路徑存在且具有讀寫權限",
            ToolError::SerializationError(_) => "可使用 --clear 清除歷史紀錄後重試",
            ToolError::CsvError(_) => "請確認輸出目的地可寫入",
            ToolError::ConfigValidationError { .. } | ToolError::InvalidConfigValueError { .. } => {
                "請檢查 tw-toolbox.toml 設定檔內容"
            }
        }
    }
}

impl ErrorSeverity {
    /// 命令列結束代碼：輸入錯誤 1、設定錯誤 2、存取錯誤 3
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
