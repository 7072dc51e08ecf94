//! Verge - Minimum-version gate for dependency-management tools.
//!
//! Verge enforces a minimum-version precondition for installed tooling
//! before dependent code proceeds: it obtains the installed tool's
//! version, compares it against a required minimum, and fails fast with
//! a message naming both versions when the installation is too old.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`gate`] - The minimum-version check itself
//! - [`probe`] - Installed-tool version discovery
//! - [`registry`] - Known tool definitions and their minimums
//! - [`version`] - Version parsing and ordering
//!
//! # Example
//!
//! ```
//! use verge::gate::Gate;
//! use verge::version::Version;
//!
//! let gate = Gate::new("bundler", Version::new(vec![1, 16, 5]));
//! assert!(gate.check_str("2.4.10").is_ok());
//!
//! let err = gate.check_str("1.16.4").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "unsupported bundler version 1.16.4, please use 1.16.5 or more recent"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod gate;
pub mod probe;
pub mod registry;
pub mod version;

pub use error::{Result, VergeError};
