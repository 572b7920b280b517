use crate::domain::model::{
    Person, PolicyReport, ReportFormat, RunReport, SortAlgorithm, SortSummary,
};
use crate::utils::error::Result;
use rand::Rng;
use std::cmp::Ordering;

/// 兩筆資料之間的三向比較策略
pub trait OrderingPolicy: Send + Sync {
    /// 查詢用的短名稱，例如 `"age"`
    fn name(&self) -> &'static str;

    /// 報表顯示用的標籤，例如 `"Age"`
    fn label(&self) -> &'static str;

    fn compare(&self, a: &Person, b: &Person) -> Ordering;

    /// 空值排在任何非空值之前，兩個空值視為相等
    fn compare_nullable(&self, a: Option<&Person>, b: Option<&Person>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }
}

pub trait RecordSource {
    fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Person>>;
}

/// 接收執行過程中產生的結果
pub trait ReportSink {
    fn on_generated(&mut self, count: usize) -> Result<()>;

    /// 排序開始前呼叫
    fn on_sorting(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn on_sorted(&mut self, summary: &SortSummary) -> Result<()>;
    fn on_policy_reports(&mut self, reports: &[PolicyReport]) -> Result<()>;

    /// 執行結束時收到完整結果
    fn finish(&mut self, _report: &RunReport) -> Result<()> {
        Ok(())
    }
}

pub trait ConfigProvider {
    fn record_count(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn policies(&self) -> &[String];
    fn preview_len(&self) -> usize;
    fn algorithm(&self) -> SortAlgorithm;
    fn report_format(&self) -> ReportFormat;
    fn inspect_policies(&self) -> bool;
}
