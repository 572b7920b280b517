pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;

pub use self::app::reporters::build_reporter;
pub use self::app::sources::{rng_from_seed, RandomPeopleSource};
pub use self::core::{engine::SortTimerEngine, timed_sort::sort_timed};
pub use self::utils::error::{Result, SortTimerError};
