//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Too many args!")]
    TooManyArgs,

    #[error("Unknown param: {token}")]
    UnknownParam { token: String },

    #[error("Invalid sort pass: {token}")]
    InvalidPassSpec { token: String },

    #[error("Invalid number: {token}")]
    InvalidNumber { token: String },

    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid field separator: {sep}")]
    InvalidSeparator { sep: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::FileNotFound { .. }
            | SortError::PermissionDenied { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create an unknown parameter error
    pub fn unknown_param(token: &str) -> Self {
        SortError::UnknownParam {
            token: token.to_string(),
        }
    }

    /// Create an invalid pass spec error
    pub fn invalid_pass_spec(token: &str) -> Self {
        SortError::InvalidPassSpec {
            token: token.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(token: &str) -> Self {
        SortError::InvalidNumber {
            token: token.to_string(),
        }
    }

    /// Create a missing flag value error
    pub fn missing_value(flag: &str) -> Self {
        SortError::MissingValue {
            flag: flag.to_string(),
        }
    }

    /// Create an invalid separator error
    pub fn invalid_separator(sep: &str) -> Self {
        SortError::InvalidSeparator {
            sep: sep.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for labelling I/O errors with the path they came from
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_diagnostics() {
        assert_eq!(SortError::TooManyArgs.to_string(), "Too many args!");
        assert_eq!(
            SortError::unknown_param("--frobnicate").to_string(),
            "Unknown param: --frobnicate"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SortError::TooManyArgs.exit_code(), crate::EXIT_FAILURE);
        assert_eq!(
            SortError::unknown_param("x").exit_code(),
            crate::EXIT_FAILURE
        );
        assert_eq!(
            SortError::file_not_found("missing.txt").exit_code(),
            crate::SORT_FAILURE
        );
    }

    #[test]
    fn test_file_context() {
        let err: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        match err.with_file_context("input.txt") {
            Err(SortError::FileNotFound { file }) => assert_eq!(file, "input.txt"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
