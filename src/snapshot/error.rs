use std::fmt;

#[derive(Debug)]
pub enum SnapshotError {
    /// Reading or writing a snapshot file failed
    Io { path: String, source: std::io::Error },

    /// JSON serialization of a screen failed
    JsonSerialize { context: String, source: serde_json::Error },

    /// JSON parsing of a snapshot failed
    JsonParse { context: String, source: serde_json::Error },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io { path, source } => {
                write!(f, "Snapshot I/O failed for '{}': {}", path, source)
            }
            SnapshotError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            SnapshotError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::JsonSerialize { source, .. } => Some(source),
            SnapshotError::JsonParse { source, .. } => Some(source),
        }
    }
}
