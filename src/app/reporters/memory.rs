use crate::core::{PolicyReport, ReportSink, RunReport, SortSummary};
use crate::utils::error::Result;

/// 把收到的事件留在記憶體中，供測試檢查
#[derive(Debug, Default)]
pub struct MemorySink {
    pub generated: Option<usize>,
    pub sorting: Vec<String>,
    pub sorted: Vec<SortSummary>,
    pub policy_reports: Vec<PolicyReport>,
    pub finished: bool,
}

impl ReportSink for MemorySink {
    fn on_generated(&mut self, count: usize) -> Result<()> {
        self.generated = Some(count);
        Ok(())
    }

    fn on_sorting(&mut self, label: &str) -> Result<()> {
        self.sorting.push(label.to_string());
        Ok(())
    }

    fn on_sorted(&mut self, summary: &SortSummary) -> Result<()> {
        self.sorted.push(summary.clone());
        Ok(())
    }

    fn on_policy_reports(&mut self, reports: &[PolicyReport]) -> Result<()> {
        self.policy_reports.extend_from_slice(reports);
        Ok(())
    }

    fn finish(&mut self, _report: &RunReport) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
