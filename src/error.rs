//! Error types for nbdeps operations.
//!
//! This module defines [`NbdepsError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NbdepsError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `NbdepsError::Other`) for unexpected errors
//! - A missing package is not an error; it is reported in the dependency table
//! - A failed install is reported to the user and never propagated

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nbdeps operations.
#[derive(Debug, Error)]
pub enum NbdepsError {
    /// Notebook file not found at the given location.
    #[error("Notebook not found: {path}")]
    NotebookNotFound { path: PathBuf },

    /// Notebook is not valid JSON or lacks the expected cell structure.
    #[error("Failed to parse notebook at {path}: {message}")]
    NotebookParse { path: PathBuf, message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A `--pin` value was not of the form `module=version`.
    #[error("Invalid pin '{value}': expected MODULE=VERSION")]
    InvalidPin { value: String },

    /// The Python interpreter could not be run to query package metadata.
    #[error("Python interpreter '{python}' is unavailable: {message}")]
    InterpreterUnavailable { python: String, message: String },

    /// External command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Input ended before a yes/no answer was given.
    #[error("Input closed while waiting for an answer to: {question}")]
    InputClosed { question: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nbdeps operations.
pub type Result<T> = std::result::Result<T, NbdepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notebook_not_found_displays_path() {
        let err = NbdepsError::NotebookNotFound {
            path: PathBuf::from("/work/analysis.ipynb"),
        };
        assert!(err.to_string().contains("/work/analysis.ipynb"));
    }

    #[test]
    fn notebook_parse_displays_path_and_message() {
        let err = NbdepsError::NotebookParse {
            path: PathBuf::from("nb.ipynb"),
            message: "missing field `cells`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nb.ipynb"));
        assert!(msg.contains("missing field `cells`"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = NbdepsError::ConfigParse {
            path: PathBuf::from("nbdeps.yml"),
            message: "invalid type".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nbdeps.yml"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn invalid_pin_displays_value() {
        let err = NbdepsError::InvalidPin {
            value: "numpy".into(),
        };
        assert!(err.to_string().contains("'numpy'"));
    }

    #[test]
    fn interpreter_unavailable_displays_python() {
        let err = NbdepsError::InterpreterUnavailable {
            python: "python3.11".into(),
            message: "not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3.11"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = NbdepsError::CommandFailed {
            command: "python3 -m pip install numpy".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install numpy"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NbdepsError = io_err.into();
        assert!(matches!(err, NbdepsError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(NbdepsError::InvalidPin {
                value: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
