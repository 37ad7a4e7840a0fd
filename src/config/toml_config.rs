use crate::config::{
    validate_search_settings, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_TARGET_LENGTH,
};
use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, SearchStrategy};
use crate::utils::error::{CombinerError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub combiner: CombinerMetadata,
    pub search: SearchSection,
    pub output: Option<OutputSection>,
    pub monitoring: Option<MonitoringSection>,
    /// Anchor parsed out of `search.anchor`, filled by `from_toml_str`.
    #[serde(skip)]
    anchor: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinerMetadata {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    pub fragments: Vec<String>,
    pub anchor: String,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub target_length: Option<usize>,
    pub strategy: Option<SearchStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CombinerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| CombinerError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.anchor = validation::validate_single_char("search.anchor", &config.search.anchor)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${ANCHOR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CombinerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_search_settings(self, "search.")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn fragments(&self) -> &[String] {
        &self.search.fragments
    }

    fn anchor(&self) -> char {
        self.anchor
    }

    fn min_length(&self) -> usize {
        self.search.min_length.unwrap_or(DEFAULT_MIN_LENGTH)
    }

    fn max_length(&self) -> usize {
        self.search.max_length.unwrap_or(DEFAULT_MAX_LENGTH)
    }

    fn target_length(&self) -> usize {
        self.search.target_length.unwrap_or(DEFAULT_TARGET_LENGTH)
    }

    fn strategy(&self) -> SearchStrategy {
        self.search.strategy.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
