pub mod csv;
pub mod json;
pub mod memory;
pub mod text;

pub use self::csv::CsvReporter;
pub use json::JsonReporter;
pub use memory::MemorySink;
pub use text::TextReporter;

use crate::core::{ReportFormat, ReportSink};
use std::io::Write;

/// 依輸出格式建立對應的報表
pub fn build_reporter<'a, W: Write + 'a>(
    format: ReportFormat,
    writer: W,
) -> Box<dyn ReportSink + 'a> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new(writer)),
        ReportFormat::Json => Box::new(JsonReporter::new(writer, true)),
        ReportFormat::Csv => Box::new(CsvReporter::new(writer)),
    }
}
