use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一筆合成的人員資料，建立後不可變更
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.name, self.age)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Stable,
    Unstable,
}

impl std::str::FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Ok(SortAlgorithm::Stable),
            "unstable" => Ok(SortAlgorithm::Unstable),
            other => Err(format!("unknown sort algorithm '{}'", other)),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Stable => f.write_str("stable"),
            SortAlgorithm::Unstable => f.write_str("unstable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

/// 單次計時排序交給報表的摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSummary {
    pub policy: String,
    pub label: String,
    pub algorithm: SortAlgorithm,
    pub record_count: usize,
    pub elapsed_ms: u64,
    pub elapsed_us: u64,
    pub preview: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterShape {
    pub type_name: String,
    pub name: String,
}

/// 排序策略型別的描述資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReport {
    pub type_name: String,
    pub full_name: String,
    pub implements_ordering_policy: bool,
    pub compare_parameters: Vec<ParameterShape>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub generated_count: usize,
    pub sorts: Vec<SortSummary>,
    pub policy_reports: Vec<PolicyReport>,
}
