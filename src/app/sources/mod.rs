pub mod fixed_source;
pub mod random_source;

pub use fixed_source::FixedSource;
pub use random_source::{rng_from_seed, RandomPeopleSource};
