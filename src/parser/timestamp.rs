use crate::error::{Result, StatsError};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::SystemTime;

/// Format used for the datetime column, always UTC
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a file time as `YYYY-MM-DDTHH:MM:SSZ` in UTC
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// Creation time of `path`, formatted for the datetime column.
///
/// Filesystems that do not record a birth time fall back to the
/// modification time.
pub fn creation_timestamp(path: &Path) -> Result<String> {
    let to_err = |source| StatsError::Timestamp {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(to_err)?;
    let time = match metadata.created() {
        Ok(created) => created,
        Err(_) => metadata.modified().map_err(to_err)?,
    };
    Ok(format_timestamp(time))
}
