use crate::utils::error::{Result, SortTimerError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SortTimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SortTimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SortTimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 每個名稱都必須在允許清單內，且不可重複
pub fn validate_one_of(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    let mut seen = HashSet::new();

    for value in values {
        if !allowed_set.contains(value.as_str()) {
            return Err(SortTimerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Allowed values: {}", allowed.join(", ")),
            });
        }
        if !seen.insert(value.as_str()) {
            return Err(SortTimerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Value listed more than once".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("preview", 5, 1).is_ok());
        assert!(validate_positive_number("preview", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("count", 0i64, 0, 100).is_ok());
        assert!(validate_range("count", 100i64, 0, 100).is_ok());
        assert!(validate_range("count", -1i64, 0, 100).is_err());
        assert!(validate_range("count", 101i64, 0, 100).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let ok = vec!["age".to_string(), "name".to_string()];
        assert!(validate_one_of("policies", &ok, &["age", "name"]).is_ok());

        let unknown = vec!["height".to_string()];
        assert!(validate_one_of("policies", &unknown, &["age", "name"]).is_err());

        let duplicated = vec!["age".to_string(), "age".to_string()];
        assert!(validate_one_of("policies", &duplicated, &["age", "name"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("run.name", "demo").is_ok());
        assert!(validate_non_empty_string("run.name", "   ").is_err());
    }
}
