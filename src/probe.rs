//! Installed-tool version discovery.
//!
//! The gate itself takes a version string as an explicit parameter; this
//! module is the only place that touches the environment to obtain one. It
//! resolves the tool's binary on PATH, runs its version command, and
//! extracts a dotted version from the output.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, VergeError};
use crate::registry::ToolSpec;

/// A version observed for an installed tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedVersion {
    /// Where the tool's binary was found.
    pub path: PathBuf,
    /// The version string extracted from the tool's output.
    pub installed: String,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command — `which` behavior varies across systems and
/// is sometimes a shell builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Extract a dotted version from command output.
///
/// Tools format their version output inconsistently ("Bundler version
/// 2.4.10", "sass 1.69.5", "v18.17.0"), so a few patterns are tried in
/// order of specificity.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+(?:\.\d+)*)",
        r"version\s+(\d+(?:\.\d+)+)",
        r"v?(\d+(?:\.\d+)+)",
    ];

    for pattern in patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }
    None
}

/// Probe the installed version of a tool using the system PATH.
pub fn probe_version(spec: &ToolSpec) -> Result<ProbedVersion> {
    probe_version_with_path(spec, &parse_system_path())
}

/// Probe the installed version of a tool using explicit PATH entries.
///
/// Taking the PATH as a parameter keeps probing testable without
/// mutating the process environment.
pub fn probe_version_with_path(spec: &ToolSpec, path_entries: &[PathBuf]) -> Result<ProbedVersion> {
    let path = resolve_tool_path(&spec.name, path_entries).ok_or_else(|| {
        VergeError::ToolNotFound {
            tool: spec.name.clone(),
        }
    })?;

    tracing::debug!("found {} at {}", spec.name, path.display());

    let output = Command::new(&path)
        .args(&spec.version_args)
        .output()
        .map_err(|e| VergeError::ProbeFailed {
            tool: spec.name.clone(),
            message: format!("running `{}` failed: {}", spec.version_command(), e),
        })?;

    if !output.status.success() {
        return Err(VergeError::ProbeFailed {
            tool: spec.name.clone(),
            message: format!(
                "`{}` exited with {}",
                spec.version_command(),
                output.status
            ),
        });
    }

    // Some tools print their version to stderr
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        stdout.to_string()
    };

    let installed = extract_version(&text).ok_or_else(|| VergeError::ProbeFailed {
        tool: spec.name.clone(),
        message: format!("no version found in output '{}'", text.trim()),
    })?;

    tracing::debug!("{} reported version {}", spec.name, installed);

    Ok(ProbedVersion { path, installed })
}
