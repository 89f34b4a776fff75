pub mod enums;
pub mod error;
pub mod format;
pub mod ratio;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Direction, TimeWindow, TrendKind};
pub use error::CoreError;
pub use format::{format_large_number, round2, to_fixed};
pub use ratio::{percent_change, population_std_dev};
pub use structs::{DailyRecord, parse_trading_day};
