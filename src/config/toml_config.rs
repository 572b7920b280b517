use crate::config::{default_policies, DEFAULT_PREVIEW_LEN, DEFAULT_RECORD_COUNT, MAX_RECORD_COUNT};
use crate::core::policy::POLICY_NAMES;
use crate::core::{ConfigProvider, ReportFormat, SortAlgorithm};
use crate::utils::error::{Result, SortTimerError};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunConfig,
    #[serde(default)]
    pub sort: SortConfig,
    #[serde(default)]
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub description: Option<String>,
    // 以有號整數讀入，負數在驗證階段回報
    #[serde(default = "default_count")]
    pub count: i64,
    pub seed: Option<u64>,
    pub max_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(default = "default_policies")]
    pub policies: Vec<String>,
    #[serde(default)]
    pub algorithm: SortAlgorithm,
    #[serde(default = "default_preview")]
    pub preview: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_true")]
    pub inspect: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

fn default_count() -> i64 {
    DEFAULT_RECORD_COUNT as i64
}

fn default_preview() -> usize {
    DEFAULT_PREVIEW_LEN
}

fn default_true() -> bool {
    true
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            policies: default_policies(),
            algorithm: SortAlgorithm::default(),
            preview: DEFAULT_PREVIEW_LEN,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            inspect: true,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SortTimerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SORT_SEED})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SortTimerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn max_count(&self) -> usize {
        self.run.max_count.unwrap_or(MAX_RECORD_COUNT)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("run.name", &self.run.name)?;

        if self.max_count() > MAX_RECORD_COUNT {
            return Err(SortTimerError::InvalidConfigValueError {
                field: "run.max_count".to_string(),
                value: self.max_count().to_string(),
                reason: format!("Value must not exceed {}", MAX_RECORD_COUNT),
            });
        }
        validate_range("run.count", self.run.count, 0, self.max_count() as i64)?;

        validate_positive_number("sort.preview", self.sort.preview, 1)?;
        validate_one_of("sort.policies", &self.sort.policies, &POLICY_NAMES)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn record_count(&self) -> usize {
        // 負數已在驗證時拒絕
        usize::try_from(self.run.count).unwrap_or(0)
    }

    fn seed(&self) -> Option<u64> {
        self.run.seed
    }

    fn policies(&self) -> &[String] {
        &self.sort.policies
    }

    fn preview_len(&self) -> usize {
        self.sort.preview
    }

    fn algorithm(&self) -> SortAlgorithm {
        self.sort.algorithm
    }

    fn report_format(&self) -> ReportFormat {
        self.report.format
    }

    fn inspect_policies(&self) -> bool {
        self.report.inspect
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
