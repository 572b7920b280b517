use crate::core::{Person, RecordSource};
use crate::utils::error::{Result, SortTimerError};
use rand::Rng;

/// 回傳預先給定的資料，不消耗亂數
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    people: Vec<Person>,
}

impl FixedSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl RecordSource for FixedSource {
    fn generate<R: Rng + ?Sized>(&self, count: usize, _rng: &mut R) -> Result<Vec<Person>> {
        if count > self.people.len() {
            return Err(SortTimerError::InvalidConfigValueError {
                field: "count".to_string(),
                value: count.to_string(),
                reason: format!("Fixed source only holds {} records", self.people.len()),
            });
        }
        Ok(self.people[..count].to_vec())
    }
}
