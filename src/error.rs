use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error types for stats conversion
#[derive(Debug)]
pub enum StatsError {
    /// Top-level path is neither a file nor a directory
    InvalidPath(PathBuf),
    /// Directory conversion was requested for something that is not a directory
    NotADirectory(PathBuf),
    /// Stats file could not be opened or read
    Read { path: PathBuf, source: io::Error },
    /// Stats file is not valid JSON
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Stats file does not have the expected layout
    Schema { path: PathBuf, message: String },
    /// File time needed for the datetime column is unavailable
    Timestamp { path: PathBuf, source: io::Error },
    /// Output destination could not be created or written
    Output(io::Error),
    /// CSV serialization errors
    Csv(csv::Error),
}

impl StatsError {
    pub(crate) fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StatsError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InvalidPath(path) => write!(
                f,
                "Path given '{}' is not a valid directory or file",
                path.display()
            ),
            StatsError::NotADirectory(path) => {
                write!(f, "Path '{}' is not a directory", path.display())
            }
            StatsError::Read { path, source } => {
                write!(f, "Failed to read stats file {}: {}", path.display(), source)
            }
            StatsError::Parse { path, source } => {
                write!(f, "Parse error in {}: {}", path.display(), source)
            }
            StatsError::Schema { path, message } => {
                write!(f, "Schema error in {}: {}", path.display(), message)
            }
            StatsError::Timestamp { path, source } => write!(
                f,
                "Failed to read file time of {}: {}",
                path.display(),
                source
            ),
            StatsError::Output(err) => write!(f, "Output error: {}", err),
            StatsError::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Read { source, .. } => Some(source),
            StatsError::Parse { source, .. } => Some(source),
            StatsError::Timestamp { source, .. } => Some(source),
            StatsError::Output(err) => Some(err),
            StatsError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for StatsError {
    fn from(err: csv::Error) -> Self {
        StatsError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_path_message_names_path() {
        let err = StatsError::InvalidPath(PathBuf::from("missing/jobs"));
        assert_eq!(
            err.to_string(),
            "Path given 'missing/jobs' is not a valid directory or file"
        );
    }

    #[test]
    fn test_read_error_exposes_source() {
        let err = StatsError::Read {
            path: PathBuf::from("job/user_stats.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("job/user_stats.json"));
    }

    #[test]
    fn test_output_error_message() {
        let err = StatsError::Output(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Output error: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_schema_helper() {
        let err = StatsError::schema("a.json", "missing 'all_stats'");
        match err {
            StatsError::Schema { path, message } => {
                assert_eq!(path, PathBuf::from("a.json"));
                assert_eq!(message, "missing 'all_stats'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
