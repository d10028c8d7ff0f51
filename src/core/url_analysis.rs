//! NB 網址參數分析。

use crate::core::{timestamp_now, ConfigProvider, HistoryEntry};
use crate::domain::model::{QueryParam, UrlAnalysis};
use crate::utils::error::{Result, ToolError};
use url::Url;

pub const DEFAULT_SOURCE_HOST: &str = "https://vtwlifepolicyadminsit.pru.intranet.asia";
pub const DEFAULT_TARGET_HOST: &str = "http://localhost:8080";
pub const DEFAULT_DISPLAY_PARAM: &str = "applNum";
/// Display text when the case number parameter is missing.
pub const NEW_CASE_LABEL: &str = "新案件";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRules {
    pub source_host: String,
    pub target_host: String,
    pub display_param: String,
}

impl Default for UrlRules {
    fn default() -> Self {
        Self {
            source_host: DEFAULT_SOURCE_HOST.to_string(),
            target_host: DEFAULT_TARGET_HOST.to_string(),
            display_param: DEFAULT_DISPLAY_PARAM.to_string(),
        }
    }
}

impl UrlRules {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            source_host: config.source_host().to_string(),
            target_host: config.target_host().to_string(),
            display_param: config.display_param().to_string(),
        }
    }
}

impl HistoryEntry for UrlAnalysis {
    const STORAGE_KEY: &'static str = "nbUrlHistory";

    fn history_key(&self) -> &str {
        &self.original_url
    }
}

pub fn analyze_url(input: &str, notes: &str, rules: &UrlRules) -> Result<UrlAnalysis> {
    if !input.starts_with("https://") {
        return Err(ToolError::InvalidUrl {
            reason: "URL must start with https://".to_string(),
        });
    }

    let url = Url::parse(input).map_err(|e| ToolError::InvalidUrl {
        reason: e.to_string(),
    })?;

    let transformed_url = input.replacen(&rules.source_host, &rules.target_host, 1);

    let params: Vec<QueryParam> = url
        .query_pairs()
        .map(|(key, value)| QueryParam {
            key: key.into_owned(),
            value: value.into_owned(),
        })
        .collect();

    let display_text = params
        .iter()
        .find(|p| p.key == rules.display_param)
        .map(|p| p.value.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or(NEW_CASE_LABEL)
        .to_string();

    tracing::debug!(
        "Analyzed URL with {} parameters, display text '{}'",
        params.len(),
        display_text
    );

    Ok(UrlAnalysis {
        original_url: input.to_string(),
        transformed_url,
        params,
        timestamp: timestamp_now(),
        display_text,
        notes: notes.to_string(),
    })
}
