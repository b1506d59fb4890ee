//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitGrepError`] which covers every failure mode of a gitgrep
//! invocation. It uses `thiserror` for ergonomic error definitions and includes
//! constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`GitGrepError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitGrepError>`
//!
//! # Error Categories
//! - **Repository**: no enclosing git repository, git2 library errors
//! - **Search backend**: `git grep` could not run or exited abnormally
//! - **Result parsing**: a raw match line without the `file:line:text` shape
//! - **Navigation**: row lookups past the visible rows (internal defect)
//! - **Environment**: config file, terminal and editor failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitgrep
#[derive(Error, Debug)]
pub enum GitGrepError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    // Search errors
    #[error("Search failed: {message}")]
    Backend { message: String },

    #[error("Malformed search result line: '{line}'")]
    Parse { line: String },

    // Navigation errors
    #[error("Row {row} is out of range ({rows} visible rows)")]
    RowOutOfRange { row: usize, rows: usize },

    // Environment errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to launch editor: {message}")]
    Editor { message: String },
}

/// Convenience type alias for Results using GitGrepError
pub type Result<T> = std::result::Result<T, GitGrepError>;

impl GitGrepError {
    /// Create a search backend error
    pub fn backend_error(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a malformed line error
    pub fn parse_error(line: impl Into<String>) -> Self {
        Self::Parse { line: line.into() }
    }

    /// Create a row out of range error
    pub fn row_out_of_range(row: usize, rows: usize) -> Self {
        Self::RowOutOfRange { row, rows }
    }

    /// Create a config read error
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Wrap a terminal I/O failure
    pub fn terminal(source: std::io::Error) -> Self {
        Self::Terminal {
            message: source.to_string(),
        }
    }

    /// Create an editor launch error
    pub fn editor_error(message: impl Into<String>) -> Self {
        Self::Editor {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitGrepError::NotInGitRepo;
        assert_eq!(err.to_string(), "Not in a git repository");
    }

    #[test]
    fn test_backend_error() {
        let err = GitGrepError::backend_error("fatal: bad pattern");
        assert_eq!(err.to_string(), "Search failed: fatal: bad pattern");
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = GitGrepError::parse_error("noColonsHere");
        assert_eq!(
            err.to_string(),
            "Malformed search result line: 'noColonsHere'"
        );
    }

    #[test]
    fn test_row_out_of_range_error() {
        let err = GitGrepError::row_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Row 5 is out of range (3 visible rows)");
    }

    #[test]
    fn test_config_read_error() {
        let path = PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = GitGrepError::config_read(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_config_parse_error() {
        let path = PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = GitGrepError::config_parse(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_terminal_error_wraps_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "not a tty");
        let err = GitGrepError::terminal(io_err);
        assert_eq!(err.to_string(), "Terminal error: not a tty");
    }
}
