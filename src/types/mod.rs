pub mod record;
pub mod table;
pub mod value;

pub use record::*;
pub use table::*;
pub use value::*;

/// Fixed name of the per-job stats file inside each job directory
pub const STATS_FILE_NAME: &str = "user_stats.json";
/// Top-level key holding the stats map
pub const ALL_STATS_KEY: &str = "all_stats";
/// Nested key inside the stats map that is never exported
pub const TOOL_USAGE_KEY: &str = "tool_usage";
/// Header name of the optional timestamp column
pub const DATETIME_FIELD: &str = "datetime";
