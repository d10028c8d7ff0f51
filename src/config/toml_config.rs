use crate::core::history::DEFAULT_HISTORY_LIMIT;
use crate::core::scan_case::default_suffixes;
use crate::core::url_analysis::{DEFAULT_DISPLAY_PARAM, DEFAULT_SOURCE_HOST, DEFAULT_TARGET_HOST};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    pub storage: StorageConfig,
    pub url_parser: UrlParserConfig,
    pub scan_case: ScanCaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./.tw-toolbox".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlParserConfig {
    pub source_host: String,
    pub target_host: String,
    pub display_param: String,
}

impl Default for UrlParserConfig {
    fn default() -> Self {
        Self {
            source_host: DEFAULT_SOURCE_HOST.to_string(),
            target_host: DEFAULT_TARGET_HOST.to_string(),
            display_param: DEFAULT_DISPLAY_PARAM.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanCaseConfig {
    pub suffixes: Vec<String>,
}

impl Default for ScanCaseConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl ToolboxConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("storage.data_dir", &self.storage.data_dir)?;
        validation::validate_range("storage.history_limit", self.storage.history_limit, 1, 100)?;

        validation::validate_url("url_parser.source_host", &self.url_parser.source_host)?;
        validation::validate_url("url_parser.target_host", &self.url_parser.target_host)?;
        validation::validate_non_empty_string(
            "url_parser.display_param",
            &self.url_parser.display_param,
        )?;

        validation::validate_positive_number("scan_case.suffixes", self.scan_case.suffixes.len(), 1)?;
        for suffix in &self.scan_case.suffixes {
            validation::validate_non_empty_string("scan_case.suffixes", suffix)?;
        }

        if let Some(level) = &self.logging.level {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.as_str()) {
                return Err(ToolError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for ToolboxConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn history_limit(&self) -> usize {
        self.storage.history_limit
    }

    fn source_host(&self) -> &str {
        &self.url_parser.source_host
    }

    fn target_host(&self) -> &str {
        &self.url_parser.target_host
    }

    fn display_param(&self) -> &str {
        &self.url_parser.display_param
    }

    fn scan_suffixes(&self) -> &[String] {
        &self.scan_case.suffixes
    }
}

impl Validate for ToolboxConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
