use crate::core::{PolicyReport, ReportSink, RunReport, SortSummary};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 5] = ["policy", "rank", "name", "age", "elapsed_ms"];

#[derive(Debug, Serialize)]
struct PreviewRow<'a> {
    policy: &'a str,
    rank: usize,
    name: &'a str,
    age: u32,
    elapsed_ms: u64,
}

/// 每筆預覽資料一列：`policy,rank,name,age,elapsed_ms`
///
/// 標題列在產生資料後立即寫出，沒有資料時輸出仍有標題
pub struct CsvReporter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
        }
    }
}

impl<W: Write> ReportSink for CsvReporter<W> {
    fn on_generated(&mut self, _count: usize) -> Result<()> {
        self.writer.write_record(HEADER)?;
        Ok(())
    }

    fn on_sorted(&mut self, summary: &SortSummary) -> Result<()> {
        for (index, person) in summary.preview.iter().enumerate() {
            self.writer.serialize(PreviewRow {
                policy: &summary.policy,
                rank: index + 1,
                name: person.name(),
                age: person.age(),
                elapsed_ms: summary.elapsed_ms,
            })?;
        }
        Ok(())
    }

    fn on_policy_reports(&mut self, _reports: &[PolicyReport]) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, _report: &RunReport) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Person, SortAlgorithm};
    use chrono::Utc;

    #[test]
    fn test_csv_rows_per_preview_entry() {
        let summary = SortSummary {
            policy: "name".to_string(),
            label: "Name".to_string(),
            algorithm: SortAlgorithm::Stable,
            record_count: 10,
            elapsed_ms: 1,
            elapsed_us: 1500,
            preview: vec![Person::new("David Garcia", 33), Person::new("Jane Wilson", 61)],
        };
        let report = RunReport {
            started_at: Utc::now(),
            seed: None,
            generated_count: 10,
            sorts: vec![summary.clone()],
            policy_reports: vec![],
        };

        let mut buffer = Vec::new();
        {
            let mut reporter = CsvReporter::new(&mut buffer);
            reporter.on_generated(10).unwrap();
            reporter.on_sorted(&summary).unwrap();
            reporter.finish(&report).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "policy,rank,name,age,elapsed_ms");
        assert_eq!(lines[1], "name,1,David Garcia,33,1");
        assert_eq!(lines[2], "name,2,Jane Wilson,61,1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_run_still_writes_header() {
        let report = RunReport {
            started_at: Utc::now(),
            seed: None,
            generated_count: 0,
            sorts: vec![],
            policy_reports: vec![],
        };

        let mut buffer = Vec::new();
        {
            let mut reporter = CsvReporter::new(&mut buffer);
            reporter.on_generated(0).unwrap();
            reporter.finish(&report).unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "policy,rank,name,age,elapsed_ms\n");
    }
}
