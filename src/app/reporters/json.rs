use crate::core::{PolicyReport, ReportSink, RunReport, SortSummary};
use crate::utils::error::Result;
use std::io::Write;

/// 事件不輸出，結束時一次寫出完整的 `RunReport`
pub struct JsonReporter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReporter<W> {
    fn on_generated(&mut self, _count: usize) -> Result<()> {
        Ok(())
    }

    fn on_sorted(&mut self, _summary: &SortSummary) -> Result<()> {
        Ok(())
    }

    fn on_policy_reports(&mut self, _reports: &[PolicyReport]) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, report: &RunReport) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
