use crate::core::{OrderingPolicy, Person};
use crate::utils::error::{Result, SortTimerError};
use std::cmp::Ordering;

pub const POLICY_NAMES: [&str; 2] = ["age", "name"];

/// 依年齡遞增
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeOrder;

impl OrderingPolicy for AgeOrder {
    fn name(&self) -> &'static str {
        "age"
    }

    fn label(&self) -> &'static str {
        "Age"
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        a.age().cmp(&b.age())
    }
}

/// 依姓名遞增，逐位元組比較，不考慮語系
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOrder;

impl OrderingPolicy for NameOrder {
    fn name(&self) -> &'static str {
        "name"
    }

    fn label(&self) -> &'static str {
        "Name"
    }

    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        a.name().as_bytes().cmp(b.name().as_bytes())
    }
}

static AGE_ORDER: AgeOrder = AgeOrder;
static NAME_ORDER: NameOrder = NameOrder;

pub fn resolve_policy(name: &str) -> Result<&'static dyn OrderingPolicy> {
    match name {
        "age" => Ok(&AGE_ORDER),
        "name" => Ok(&NAME_ORDER),
        _ => Err(SortTimerError::UnknownPolicy {
            name: name.to_string(),
        }),
    }
}

/// 依設定順序解析所有策略，空清單視為缺少策略
pub fn resolve_policies(names: &[String]) -> Result<Vec<&'static dyn OrderingPolicy>> {
    if names.is_empty() {
        return Err(SortTimerError::MissingConfigError {
            field: "policies".to_string(),
        });
    }
    names.iter().map(|name| resolve_policy(name)).collect()
}
