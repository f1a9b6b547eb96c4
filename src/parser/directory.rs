use crate::error::{Result, StatsError};
use crate::parser::{creation_timestamp, load_record};
use crate::types::{Table, STATS_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Convert every job folder under `dir_path` into one table row.
///
/// Each immediate child entry of the directory must contain a
/// `user_stats.json`; the first failure aborts the whole conversion.
/// Rows follow directory-listing order. An empty directory yields an
/// empty table.
pub fn aggregate_directory(dir_path: &Path, include_timestamp: bool) -> Result<Table> {
    if !dir_path.is_dir() {
        return Err(StatsError::NotADirectory(dir_path.to_path_buf()));
    }

    let mut table = Table::new();
    let mut header_fields: Option<Vec<String>> = None;

    for record_path in stats_file_paths(dir_path)? {
        let record = load_record(&record_path)?;
        let timestamp = if include_timestamp {
            Some(creation_timestamp(&record_path)?)
        } else {
            None
        };

        if header_fields.is_none() {
            header_fields = Some(record.fields.clone());
        } else if header_fields.as_ref() != Some(&record.fields) {
            warn!(
                path = %record_path.display(),
                "stats fields differ from header fields; row written as-is"
            );
        }

        table.push_record(&record, timestamp);
    }

    if table.is_empty() {
        warn!(dir = %dir_path.display(), "directory has no job entries; output is empty");
    } else {
        debug!(
            dir = %dir_path.display(),
            rows = table.data_rows().len(),
            "aggregated directory"
        );
    }

    Ok(table)
}

/// Convert a single stats file into a header row plus one data row
pub fn convert_file(file_path: &Path, include_timestamp: bool) -> Result<Table> {
    let record = load_record(file_path)?;
    let timestamp = if include_timestamp {
        Some(creation_timestamp(file_path)?)
    } else {
        None
    };

    let mut table = Table::new();
    table.push_record(&record, timestamp);
    Ok(table)
}

/// Candidate `<dir>/<entry>/user_stats.json` paths in listing order
fn stats_file_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let to_err = |source| StatsError::Read {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir_path).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        paths.push(dir_path.join(entry.file_name()).join(STATS_FILE_NAME));
    }
    Ok(paths)
}
