use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortTimerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown ordering policy: {name}")]
    UnknownPolicy { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Report,
    Sorting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 行程結束碼：報表錯誤 2，設定或排序錯誤 1，系統錯誤 3
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SortTimerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SortTimerError::IoError(_) => ErrorCategory::Io,
            SortTimerError::SerializationError(_) | SortTimerError::CsvError(_) => {
                ErrorCategory::Report
            }
            SortTimerError::ConfigError { .. }
            | SortTimerError::ConfigValidationError { .. }
            | SortTimerError::InvalidConfigValueError { .. }
            | SortTimerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SortTimerError::UnknownPolicy { .. } => ErrorCategory::Sorting,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Sorting => ErrorSeverity::High,
            ErrorCategory::Report => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SortTimerError::IoError(_) => {
                "Check that the file exists and that stdout is writable".to_string()
            }
            SortTimerError::SerializationError(_) | SortTimerError::CsvError(_) => {
                "Retry with --format text".to_string()
            }
            SortTimerError::ConfigError { .. } | SortTimerError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            SortTimerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SortTimerError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            SortTimerError::UnknownPolicy { .. } => format!(
                "Use one of the available policies: {}",
                crate::core::policy::POLICY_NAMES.join(", ")
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
            ErrorCategory::Report => format!("Could not render the report: {}", self),
            ErrorCategory::Sorting => format!("Cannot sort: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortTimerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_policy_is_high_severity() {
        let err = SortTimerError::UnknownPolicy {
            name: "height".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Sorting);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("age"));
        assert!(err.recovery_suggestion().contains("name"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = SortTimerError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            SortTimerError::from(std::io::Error::new(std::io::ErrorKind::Other, "io")),
            SortTimerError::from(serde_json::from_str::<u32>("x").unwrap_err()),
            SortTimerError::ConfigError {
                message: "bad".to_string(),
            },
            SortTimerError::MissingConfigError {
                field: "policies".to_string(),
            },
            SortTimerError::UnknownPolicy {
                name: "height".to_string(),
            },
        ];

        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![3, 2, 1, 1, 1]);
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = SortTimerError::InvalidConfigValueError {
            field: "run.count".to_string(),
            value: "-1".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '-1' for 'run.count': must not be negative"
        );
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
        assert!(err.recovery_suggestion().contains("run.count"));
    }
}
