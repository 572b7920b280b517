use crate::core::{OrderingPolicy, Person, SortAlgorithm};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TimedSort {
    pub sorted: Vec<Person>,
    pub elapsed: Duration,
}

impl TimedSort {
    /// 前 `len` 筆，資料不足時回傳全部
    pub fn preview(&self, len: usize) -> &[Person] {
        &self.sorted[..len.min(self.sorted.len())]
    }
}

/// 複製輸入後排序，只計算排序本身的時間
pub fn sort_timed(
    records: &[Person],
    policy: &dyn OrderingPolicy,
    algorithm: SortAlgorithm,
) -> TimedSort {
    let mut sorted = records.to_vec();

    let start = Instant::now();
    match algorithm {
        SortAlgorithm::Stable => sorted.sort_by(|a, b| policy.compare(a, b)),
        SortAlgorithm::Unstable => sorted.sort_unstable_by(|a, b| policy.compare(a, b)),
    }
    let elapsed = start.elapsed();

    tracing::debug!(
        "Sorted {} records by {} ({}) in {:?}",
        sorted.len(),
        policy.label(),
        algorithm,
        elapsed
    );

    TimedSort { sorted, elapsed }
}
