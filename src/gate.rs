//! The minimum-version gate.
//!
//! A [`Gate`] pairs a tool name with the minimum version it must meet.
//! Checking is a pure comparison: the installed version is passed in
//! explicitly, and the outcome is a `Result` rather than an abort, so
//! callers decide what a failed precondition means for them.

use crate::error::{Result, VergeError};
use crate::version::Version;

/// A minimum-version precondition for a named tool.
#[derive(Debug, Clone)]
pub struct Gate {
    tool: String,
    minimum: Version,
}

impl Gate {
    /// Create a gate enforcing `minimum` for `tool`.
    pub fn new(tool: impl Into<String>, minimum: Version) -> Self {
        Self {
            tool: tool.into(),
            minimum,
        }
    }

    /// The tool this gate applies to.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// The minimum version this gate enforces.
    pub fn minimum(&self) -> &Version {
        &self.minimum
    }

    /// Check an already-parsed version against the minimum.
    ///
    /// Equal versions pass. There are no side effects beyond the returned
    /// error.
    pub fn check(&self, actual: &Version) -> Result<()> {
        self.verdict(actual, &actual.to_string())
    }

    /// Parse `installed` and check it against the minimum.
    ///
    /// Malformed version strings are an error, never a silent pass. On
    /// failure the error message carries `installed` verbatim.
    pub fn check_str(&self, installed: &str) -> Result<()> {
        let actual: Version = installed.parse()?;
        self.verdict(&actual, installed)
    }

    fn verdict(&self, actual: &Version, shown: &str) -> Result<()> {
        tracing::debug!(
            "checking {}: installed {}, minimum {}",
            self.tool,
            actual,
            self.minimum
        );

        if *actual >= self.minimum {
            Ok(())
        } else {
            Err(VergeError::UnsupportedVersion {
                tool: self.tool.clone(),
                actual: shown.to_string(),
                minimum: self.minimum.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundler_gate() -> Gate {
        Gate::new("bundler", Version::new(vec![1, 16, 5]))
    }

    #[test]
    fn equal_version_passes() {
        assert!(bundler_gate().check_str("1.16.5").is_ok());
    }

    #[test]
    fn newer_version_passes() {
        assert!(bundler_gate().check_str("2.0.0").is_ok());
        assert!(bundler_gate().check_str("1.16.6").is_ok());
        assert!(bundler_gate().check_str("1.17.0").is_ok());
    }

    #[test]
    fn older_version_fails() {
        assert!(bundler_gate().check_str("1.16.4").is_err());
        assert!(bundler_gate().check_str("0.9.9").is_err());
    }

    #[test]
    fn numeric_comparison_beats_string_comparison() {
        // "1.9.0" sorts after "1.16.5" as a string but is older as a version
        assert!(bundler_gate().check_str("1.9.0").is_err());
    }

    #[test]
    fn failure_message_names_installed_and_minimum() {
        let err = bundler_gate().check_str("1.16.4").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported bundler version 1.16.4, please use 1.16.5 or more recent"
        );
    }

    #[test]
    fn failure_message_carries_input_verbatim() {
        let err = bundler_gate().check_str("1.16.04").unwrap_err();
        assert!(err.to_string().contains("1.16.04"));
    }

    #[test]
    fn short_version_is_padded_and_fails() {
        let err = bundler_gate().check_str("1.16").unwrap_err();
        assert!(matches!(err, VergeError::UnsupportedVersion { .. }));
    }

    #[test]
    fn padded_equal_version_passes() {
        assert!(bundler_gate().check_str("1.16.5.0").is_ok());
    }

    #[test]
    fn malformed_version_is_a_parse_error() {
        let err = bundler_gate().check_str("1.x.5").unwrap_err();
        assert!(matches!(err, VergeError::InvalidVersion { .. }));
    }

    #[test]
    fn check_accepts_parsed_versions() {
        let gate = bundler_gate();
        let ok: Version = "2.4.10".parse().unwrap();
        let old: Version = "1.0.0".parse().unwrap();
        assert!(gate.check(&ok).is_ok());
        assert!(gate.check(&old).is_err());
    }

    #[test]
    fn gate_exposes_tool_and_minimum() {
        let gate = bundler_gate();
        assert_eq!(gate.tool(), "bundler");
        assert_eq!(gate.minimum().to_string(), "1.16.5");
    }
}
