// Application layer: concrete record sources and report sinks.

pub mod reporters;
pub mod sources;
