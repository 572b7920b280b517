use crate::core::{Person, RecordSource};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "Robert", "Jennifer", "William", "Lisa",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson",
];

/// 左閉右開
pub const AGE_RANGE: Range<u32> = 18..80;

/// 從固定名單隨機組合姓名，年齡在 `AGE_RANGE` 內均勻分布
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPeopleSource;

impl RandomPeopleSource {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSource for RandomPeopleSource {
    fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Person>> {
        let people = (0..count)
            .map(|_| {
                let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
                let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
                let age = rng.gen_range(AGE_RANGE);
                Person::new(format!("{} {}", first, last), age)
            })
            .collect();

        Ok(people)
    }
}

/// 有種子時結果可重現，否則使用系統熵
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
