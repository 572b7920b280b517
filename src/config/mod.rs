pub mod toml_config;

use crate::core::policy::POLICY_NAMES;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, ReportFormat, SortAlgorithm};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_one_of, validate_positive_number, validate_range, Validate,
};

/// 單次執行允許產生的最大筆數
pub const MAX_RECORD_COUNT: usize = 10_000_000;

pub const DEFAULT_RECORD_COUNT: usize = 1000;
pub const DEFAULT_PREVIEW_LEN: usize = 5;

pub fn default_policies() -> Vec<String> {
    POLICY_NAMES.iter().map(|name| name.to_string()).collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, clap::Parser)]
#[command(name = "sort-timer")]
#[command(about = "Generate random people and time sorting them by different policies")]
pub struct CliConfig {
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub count: usize,

    #[arg(long, help = "Seed for reproducible record generation")]
    pub seed: Option<u64>,

    #[arg(long, value_delimiter = ',', default_values_t = default_policies())]
    pub policies: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_PREVIEW_LEN)]
    pub preview: usize,

    #[arg(long, default_value = "stable")]
    pub algorithm: SortAlgorithm,

    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, help = "Skip the policy metadata report")]
    pub no_inspect: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn record_count(&self) -> usize {
        self.count
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn policies(&self) -> &[String] {
        &self.policies
    }

    fn preview_len(&self) -> usize {
        self.preview
    }

    fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    fn report_format(&self) -> ReportFormat {
        self.format
    }

    fn inspect_policies(&self) -> bool {
        !self.no_inspect
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("count", self.count, 0, MAX_RECORD_COUNT)?;
        validate_positive_number("preview", self.preview, 1)?;
        validate_one_of("policies", &self.policies, &POLICY_NAMES)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["sort-timer"]);

        assert_eq!(config.record_count(), 1000);
        assert_eq!(config.seed(), None);
        assert_eq!(config.policies(), &["age".to_string(), "name".to_string()]);
        assert_eq!(config.preview_len(), 5);
        assert_eq!(config.algorithm(), SortAlgorithm::Stable);
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(config.inspect_policies());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "sort-timer",
            "--count",
            "20",
            "--seed",
            "42",
            "--policies",
            "name",
            "--algorithm",
            "unstable",
            "--format",
            "json",
            "--no-inspect",
        ]);

        assert_eq!(config.record_count(), 20);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.policies(), &["name".to_string()]);
        assert_eq!(config.algorithm(), SortAlgorithm::Unstable);
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(!config.inspect_policies());
    }

    #[test]
    fn test_cli_rejects_negative_count() {
        assert!(CliConfig::try_parse_from(["sort-timer", "--count", "-5"]).is_err());
    }

    #[test]
    fn test_cli_validation_failures() {
        let mut config = CliConfig::parse_from(["sort-timer"]);
        config.preview = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["sort-timer"]);
        config.policies = vec!["height".to_string()];
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["sort-timer"]);
        config.count = MAX_RECORD_COUNT + 1;
        assert!(config.validate().is_err());
    }
}
