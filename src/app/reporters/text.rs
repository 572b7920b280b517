use crate::core::{PolicyReport, ReportSink, RunReport, SortSummary};
use crate::utils::error::Result;
use std::io::Write;

pub const BANNER: &str = "SortTimer Application";

/// 逐行輸出給人看的主控台報表
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn on_generated(&mut self, count: usize) -> Result<()> {
        writeln!(self.writer, "{}", BANNER)?;
        writeln!(self.writer, "{}", "=".repeat(35))?;
        writeln!(self.writer, "Generated {} random people.", count)?;
        Ok(())
    }

    fn on_sorting(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Sorting by {}...", label)?;
        Ok(())
    }

    fn on_sorted(&mut self, summary: &SortSummary) -> Result<()> {
        writeln!(
            self.writer,
            "Sorted {} people by {} in {} ms",
            summary.record_count, summary.label, summary.elapsed_ms
        )?;
        writeln!(
            self.writer,
            "First {} items after sorting by {}:",
            summary.preview.len(),
            summary.label
        )?;
        for person in &summary.preview {
            writeln!(self.writer, "  {}", person)?;
        }
        Ok(())
    }

    fn on_policy_reports(&mut self, reports: &[PolicyReport]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Policy Metadata Analysis:")?;
        writeln!(self.writer, "{}", "-".repeat(32))?;

        for report in reports {
            writeln!(self.writer)?;
            writeln!(self.writer, "Inspecting {}:", report.type_name)?;
            writeln!(self.writer, "  Full Name: {}", report.full_name)?;
            writeln!(
                self.writer,
                "  Implements OrderingPolicy: {}",
                report.implements_ordering_policy
            )?;
            writeln!(self.writer, "  Compare method parameters:")?;
            for param in &report.compare_parameters {
                writeln!(self.writer, "    {} {}", param.type_name, param.name)?;
            }
        }
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
    use crate::core::inspect::inspect;
    use crate::core::policy::NameOrder;
    use crate::core::{Person, SortAlgorithm};

    fn summary() -> SortSummary {
        SortSummary {
            policy: "name".to_string(),
            label: "Name".to_string(),
            algorithm: SortAlgorithm::Stable,
            record_count: 3,
            elapsed_ms: 0,
            elapsed_us: 12,
            preview: vec![Person::new("A", 20), Person::new("B", 30)],
        }
    }

    #[test]
    fn test_text_report_layout() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.on_generated(3).unwrap();
        reporter.on_sorting("Name").unwrap();
        reporter.on_sorted(&summary()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[2], "Generated 3 random people.");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Sorting by Name...");
        assert_eq!(lines[5], "Sorted 3 people by Name in 0 ms");
        assert_eq!(lines[6], "First 2 items after sorting by Name:");
        assert_eq!(lines[7], "  A (20 years)");
        assert_eq!(lines[8], "  B (30 years)");
    }

    #[test]
    fn test_sorting_line_precedes_result() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.on_sorting("Age").unwrap();

        // 排序尚未完成時只有開始訊息
        let started = String::from_utf8(reporter.writer.clone()).unwrap();
        assert_eq!(started, "\nSorting by Age...\n");

        reporter.on_sorted(&summary()).unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.starts_with("\nSorting by Age...\nSorted 3 people by Name in 0 ms\n"));
    }

    #[test]
    fn test_text_policy_report() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.on_policy_reports(&[inspect::<NameOrder>()]).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("Inspecting NameOrder:"));
        assert!(output.contains("  Implements OrderingPolicy: true"));
        assert!(output.contains("    Person a\n    Person b\n"));
    }
}
