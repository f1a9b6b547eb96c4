use crate::error::{Result, StatsError};
use crate::parser::{aggregate_directory, convert_file};
use crate::types::Table;
use std::path::Path;

/// Conversion options shared by the CLI and library callers
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Prepend a "datetime" column holding each stats file's creation time
    pub include_timestamp: bool,
    /// Treat the input as a directory of job folders even when it is not one
    /// (legacy `--csv` switch); a non-directory then fails
    pub force_directory: bool,
}

/// Convert a stats file or a directory of job folders into a table
pub fn convert_path(path: &Path, options: &ConvertOptions) -> Result<Table> {
    if options.force_directory || path.is_dir() {
        aggregate_directory(path, options.include_timestamp)
    } else if path.is_file() {
        convert_file(path, options.include_timestamp)
    } else {
        Err(StatsError::InvalidPath(path.to_path_buf()))
    }
}
