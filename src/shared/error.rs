use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a dataset that failed its
/// integrity checks from a run that could not complete at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the dataset passed its integrity checks
    Success = 0,
    /// Integrity errors were found (or warnings, in strict mode)
    IntegrityViolations = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, payload schema, configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IntegrityViolations => write!(f, "Integrity Violations (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised while loading and presenting payloads.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("Payload file not found: {path}\n\n💡 Hint: {suggestion}")]
    PayloadNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read payload file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    PayloadReadError { path: PathBuf, details: String },

    #[error("Payload from {source_label} does not match the opportunity schema\nDetails: {details}\n\n💡 Hint: Fix the record named above or re-export the payload")]
    PayloadSchema {
        source_label: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builders and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
