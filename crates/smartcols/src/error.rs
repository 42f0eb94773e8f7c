//! Error types for column operations.
//!
//! Column operations distinguish a bad call ([`ColumnError::InvalidArgument`])
//! from resource exhaustion ([`ColumnError::OutOfMemory`]). Failures while
//! loading a color scheme table are reported as [`SchemeError`].

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by column, cell and list operations.
#[derive(Debug, Error)]
pub enum ColumnError {
    /// The operand is absent, or a value was rejected (e.g. an unknown color name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Copying an owned string or cell failed to allocate.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// A color scheme table could not be loaded.
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    /// A declarative column definition could not be parsed.
    #[error("invalid column definition: {0}")]
    Config(String),
}

impl ColumnError {
    /// Shorthand for the absent-column case.
    pub(crate) fn absent() -> Self {
        ColumnError::InvalidArgument("column is absent".to_string())
    }

    /// Whether this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ColumnError::InvalidArgument(_))
    }

    /// Whether this is an allocation failure.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, ColumnError::OutOfMemory(_))
    }
}

impl From<serde_yaml::Error> for ColumnError {
    fn from(err: serde_yaml::Error) -> Self {
        ColumnError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ColumnError {
    fn from(err: serde_json::Error) -> Self {
        ColumnError::Config(err.to_string())
    }
}

/// Errors raised while building a [`SchemeTable`](crate::scheme::SchemeTable).
#[derive(Debug, Error)]
pub enum SchemeError {
    /// YAML parse error.
    #[error("failed to parse color scheme{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// An entry refers to a color name that neither the table nor the
    /// built-in scheme defines.
    #[error("color scheme entry '{entry}' refers to unknown color '{value}'")]
    UnknownColor {
        /// The entry being defined.
        entry: String,
        /// The unresolvable value.
        value: String,
    },

    /// An entry name does not start with an alphanumeric character and so
    /// could never be looked up.
    #[error("invalid color scheme entry name '{0}'")]
    InvalidName(String),

    /// Reading a scheme file failed.
    #[error("failed to read color scheme {}: {source}", .path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for column operations.
pub type Result<T> = std::result::Result<T, ColumnError>;
