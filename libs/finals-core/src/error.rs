//! Error types for finals-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using WriteError.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Errors that can occur while writing the quiz data files.
///
/// Parsing itself never fails: malformed rows are skipped.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to serialize {}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn create_dir_display_names_path() {
        let error = WriteError::CreateDir {
            path: PathBuf::from("data"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "failed to create output directory data");
    }

    #[test]
    fn write_error_keeps_io_source() {
        let error = WriteError::Write {
            path: PathBuf::from("data/questions_finals_verbs.json"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(
            error.to_string(),
            "failed to write data/questions_finals_verbs.json"
        );
        assert_eq!(error.source().map(|s| s.to_string()), Some("disk full".to_string()));
    }
}
