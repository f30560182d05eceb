use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a size calculation failure apart from
/// usage mistakes and infrastructure problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested package was measured
    Success = 0,
    /// The index returned metadata that did not contain a version or artifact size
    CalculationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, HTTP status, config or file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that reached `main`.
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DepsizeError>() {
            Some(DepsizeError::CalculationFailed { .. }) => ExitCode::CalculationFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CalculationFailed => write!(f, "Calculation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency size calculation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the messages user-friendly.
#[derive(Debug, Error)]
pub enum DepsizeError {
    /// The index answered, but the document lacks the latest version or its first artifact size.
    /// `data` holds the pretty-printed response document for diagnosis.
    #[error("Failed to calculate size of {package}\n\nData = {data}")]
    CalculationFailed { package: String, data: String },

    #[error("Failed to fetch metadata for package '{package}' from the package index\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the index URL")]
    IndexRequestFailed { package: String, details: String },

    /// Non-success status whose body is not a JSON document
    #[error("Package index returned HTTP {status} for package '{package}'\n\n💡 Hint: Please verify that the package name is spelled correctly")]
    IndexResponseError { package: String, status: u16 },

    #[error("Invalid package name: '{name}'\nReason: {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
