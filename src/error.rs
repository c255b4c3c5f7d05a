// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for coursecraft
//!
//! The workspace core never fails; these cover the terminal host and the
//! settings file.

use thiserror::Error;

/// Main error type for coursecraft operations
#[derive(Error, Debug)]
pub enum CourseError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing or teardown errors
    #[error("TUI error: {0}")]
    Tui(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for coursecraft operations
pub type Result<T> = std::result::Result<T, CourseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_error_config() {
        let err = CourseError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_course_error_tui() {
        let err = CourseError::Tui("no tty".to_string());
        assert_eq!(err.to_string(), "TUI error: no tty");
    }

    #[test]
    fn test_course_error_invalid_input() {
        let err = CourseError::InvalidInput("unknown stage".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_course_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CourseError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_course_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CourseError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_course_error_debug() {
        let err = CourseError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }
}
