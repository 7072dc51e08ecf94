//! Version parsing and ordering.
//!
//! A [`Version`] is an ordered sequence of non-negative integers obtained by
//! splitting a dot-delimited string. Comparison is lexicographic, component
//! by component from the left, which matches ordinary major.minor.patch
//! ordering: `1.9.0 < 1.16.5 < 2.0.0`.
//!
//! Versions with a different number of components are compared as if the
//! shorter one were padded with zeros, so `1.16 == 1.16.0` and
//! `1.16 < 1.16.5`. Equality and hashing follow the same rule.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::VergeError;

/// An ordered sequence of numeric version components.
#[derive(Debug, Clone)]
pub struct Version(Vec<u64>);

impl Version {
    /// Create a version from raw components.
    pub fn new(components: Vec<u64>) -> Self {
        Self(components)
    }

    /// The numeric components, in order.
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// Components with trailing zeros removed.
    ///
    /// This is the canonical form used for equality and hashing, so that
    /// `1.16.0` and `1.16` behave as the same version.
    fn significant(&self) -> &[u64] {
        let end = self
            .0
            .iter()
            .rposition(|&c| c != 0)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.0[..end]
    }
}

impl FromStr for Version {
    type Err = VergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| VergeError::InvalidVersion {
            input: s.to_string(),
            message: message.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("empty version string"));
        }

        let mut components = Vec::new();
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(invalid("empty component"));
            }
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VergeError::InvalidVersion {
                    input: s.to_string(),
                    message: format!("component '{}' is not a number", segment),
                });
            }
            let value = segment.parse::<u64>().map_err(|_| {
                VergeError::InvalidVersion {
                    input: s.to_string(),
                    message: format!("component '{}' is out of range", segment),
                }
            })?;
            components.push(value);
        }

        Ok(Self(components))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = other.0.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}
