//! Error types for Verge operations.
//!
//! This module defines [`VergeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VergeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `VergeError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! A failed gate is reported as a value, never as a process abort. Only the
//! binary entry point turns an error into a nonzero exit code.

use thiserror::Error;

/// Core error type for Verge operations.
#[derive(Debug, Error)]
pub enum VergeError {
    /// The installed tool is older than the enforced minimum.
    ///
    /// The display message carries the version string exactly as it was
    /// observed, so users can match it against their installation.
    #[error("unsupported {tool} version {actual}, please use {minimum} or more recent")]
    UnsupportedVersion {
        tool: String,
        actual: String,
        minimum: String,
    },

    /// A version string could not be parsed into numeric components.
    #[error("invalid version string '{input}': {message}")]
    InvalidVersion { input: String, message: String },

    /// The tool's binary was not found on PATH.
    #[error("tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    /// The tool was found but its version could not be determined.
    #[error("failed to determine {tool} version: {message}")]
    ProbeFailed { tool: String, message: String },

    /// The tool has no builtin definition and no minimum was supplied.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Verge operations.
pub type Result<T> = std::result::Result<T, VergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_message_format() {
        let err = VergeError::UnsupportedVersion {
            tool: "bundler".into(),
            actual: "1.16.4".into(),
            minimum: "1.16.5".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported bundler version 1.16.4, please use 1.16.5 or more recent"
        );
    }

    #[test]
    fn invalid_version_displays_input_and_message() {
        let err = VergeError::InvalidVersion {
            input: "1.x.5".into(),
            message: "component 'x' is not a number".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.x.5"));
        assert!(msg.contains("not a number"));
    }

    #[test]
    fn tool_not_found_displays_tool() {
        let err = VergeError::ToolNotFound {
            tool: "bundler".into(),
        };
        assert!(err.to_string().contains("bundler"));
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn probe_failed_displays_tool_and_message() {
        let err = VergeError::ProbeFailed {
            tool: "bundler".into(),
            message: "no version found in output".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bundler"));
        assert!(msg.contains("no version found"));
    }

    #[test]
    fn unknown_tool_displays_name() {
        let err = VergeError::UnknownTool {
            name: "frobnicator".into(),
        };
        assert!(err.to_string().contains("frobnicator"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VergeError = io_err.into();
        assert!(matches!(err, VergeError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(VergeError::UnknownTool {
                name: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
