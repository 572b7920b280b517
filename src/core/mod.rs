pub mod engine;
pub mod inspect;
pub mod policy;
pub mod timed_sort;

pub use crate::domain::model::{
    ParameterShape, Person, PolicyReport, ReportFormat, RunReport, SortAlgorithm, SortSummary,
};
pub use crate::domain::ports::{ConfigProvider, OrderingPolicy, RecordSource, ReportSink};
pub use crate::utils::error::Result;
