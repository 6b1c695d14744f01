//! Shared error types for the application

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for interfgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input workbook does not exist
    #[error("Input file not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// Workbook extension is not one of the supported formats
    #[error("Unsupported format '{extension}' for '{}': use .xlsx or .xls", .path.display())]
    Format { path: PathBuf, extension: String },

    /// Workbook or sheet could not be opened
    #[error("Cannot open sheet '{sheet}' in '{}': {reason}", .path.display())]
    Sheet {
        path: PathBuf,
        sheet: String,
        reason: String,
    },

    /// Required columns are missing from the header row
    #[error("Sheet '{sheet}' is missing required columns: {}", .missing.join(", "))]
    Schema { sheet: String, missing: Vec<String> },

    /// No DynamicInterference rows survived filtering
    #[error("No DynamicInterference rows found")]
    EmptyResult,

    /// Root identifier does not encode a motor pair
    #[error("Malformed root identifier: '{root}'")]
    MalformedRoot { root: String },

    /// Invalid request or configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output file could not be written
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn format(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create a sheet error from any displayable reader failure
    pub fn sheet(path: &Path, sheet: &str, reason: impl std::fmt::Display) -> Self {
        Self::Sheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed_root(root: impl Into<String>) -> Self {
        Self::MalformedRoot { root: root.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the error aborts the whole run.
    ///
    /// Only a malformed root is recoverable: the offending row is skipped and
    /// processing continues with the next one.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MalformedRoot { .. })
    }

    /// Short category name used in log fields and CLI output
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not-found",
            Self::Format { .. } => "format",
            Self::Sheet { .. } => "sheet",
            Self::Schema { .. } => "schema",
            Self::EmptyResult => "empty-result",
            Self::MalformedRoot { .. } => "malformed-root",
            Self::Config(_) => "config",
            Self::Io { .. } => "io",
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
