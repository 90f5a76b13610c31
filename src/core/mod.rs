pub mod calculator;
pub mod checks;
pub mod clock;
pub mod log;
pub mod logic;
pub mod periods;
pub mod presence;
pub mod schedule;
pub mod school_year;
pub mod splitter;

pub use calculator::aggregator::{aggregate_day, aggregate_range};
pub use calculator::normalizer::normalize;
pub use calculator::rollup::{rollup_days, rollup_period};
pub use splitter::split_vacation_range;
