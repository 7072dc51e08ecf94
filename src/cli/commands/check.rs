//! Check command implementation.
//!
//! The `verge check` command probes installed tools and enforces their
//! minimum versions. The gate outcome decides the exit code: any failing
//! or unprobeable tool makes the whole check fail.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{Result, VergeError};
use crate::gate::Gate;
use crate::probe;
use crate::registry::{Registry, ToolSpec};
use crate::version::Version;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// Outcome of gating a single tool.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Tool name.
    pub tool: String,
    /// Minimum version that was enforced.
    pub minimum: String,
    /// Version observed for the installed tool, when one was obtained.
    pub installed: Option<String>,
    /// Whether the gate passed.
    pub ok: bool,
    /// Failure message, when the gate did not pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    quiet: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }

    /// Resolve which tool specs this invocation gates.
    ///
    /// A named tool uses its builtin definition, with `--min` overriding
    /// the minimum. A tool without a builtin definition requires `--min`.
    /// With no tool named, every known tool is gated.
    fn targets(&self, registry: &Registry) -> Result<Vec<ToolSpec>> {
        let min_override = match &self.args.min {
            Some(raw) => Some(raw.parse::<Version>()?),
            None => None,
        };

        let mut specs = Vec::new();
        match &self.args.tool {
            Some(name) => match registry.get(name) {
                Some(spec) => {
                    let mut spec = spec.clone();
                    if let Some(min) = min_override {
                        spec.minimum = min;
                    }
                    specs.push(spec);
                }
                None => {
                    let minimum = min_override
                        .ok_or_else(|| VergeError::UnknownTool { name: name.clone() })?;
                    specs.push(ToolSpec::new(name.clone(), minimum));
                }
            },
            None => {
                for name in registry.known_names() {
                    if let Some(spec) = registry.get(name) {
                        let mut spec = spec.clone();
                        if let Some(min) = &min_override {
                            spec.minimum = min.clone();
                        }
                        specs.push(spec);
                    }
                }
            }
        }
        Ok(specs)
    }

    /// Gate a single tool, turning every failure into a report entry.
    fn check_tool(&self, spec: &ToolSpec) -> CheckReport {
        let gate = Gate::new(spec.name.clone(), spec.minimum.clone());

        let installed = match &self.args.installed {
            Some(injected) => Ok(injected.clone()),
            None => probe::probe_version(spec).map(|probed| probed.installed),
        };

        match installed {
            Ok(installed) => match gate.check_str(&installed) {
                Ok(()) => CheckReport {
                    tool: spec.name.clone(),
                    minimum: spec.minimum.to_string(),
                    installed: Some(installed),
                    ok: true,
                    error: None,
                },
                Err(err) => CheckReport {
                    tool: spec.name.clone(),
                    minimum: spec.minimum.to_string(),
                    installed: Some(installed),
                    ok: false,
                    error: Some(err.to_string()),
                },
            },
            Err(err) => CheckReport {
                tool: spec.name.clone(),
                minimum: spec.minimum.to_string(),
                installed: None,
                ok: false,
                error: Some(err.to_string()),
            },
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = Registry::new();

        let specs = match self.targets(&registry) {
            Ok(specs) => specs,
            Err(VergeError::UnknownTool { name }) => {
                eprintln!(
                    "{}",
                    display::fail_line(&format!(
                        "unknown tool: {}. Pass --min to gate tools without a builtin minimum.",
                        name
                    ))
                );
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let reports: Vec<CheckReport> = specs.iter().map(|spec| self.check_tool(spec)).collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&reports).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            for report in &reports {
                if report.ok {
                    if !self.quiet {
                        println!(
                            "{}",
                            display::pass_line(
                                &report.tool,
                                report.installed.as_deref().unwrap_or("?"),
                                &report.minimum,
                            )
                        );
                    }
                } else {
                    eprintln!(
                        "{}",
                        display::fail_line(report.error.as_deref().unwrap_or("check failed"))
                    );
                }
            }
        }

        if reports.iter().all(|report| report.ok) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_args(tool: Option<&str>, min: Option<&str>, installed: Option<&str>) -> CheckArgs {
        CheckArgs {
            tool: tool.map(String::from),
            min: min.map(String::from),
            installed: installed.map(String::from),
            json: false,
        }
    }

    #[test]
    fn targets_default_to_known_tools() {
        let cmd = CheckCommand::new(check_args(None, None, None), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "bundler");
        assert_eq!(specs[0].minimum.to_string(), "1.16.5");
    }

    #[test]
    fn targets_min_overrides_builtin() {
        let cmd = CheckCommand::new(check_args(Some("bundler"), Some("2.0"), None), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        assert_eq!(specs[0].minimum.to_string(), "2.0");
    }

    #[test]
    fn targets_unknown_tool_without_min_is_an_error() {
        let cmd = CheckCommand::new(check_args(Some("frobnicator"), None, None), false);
        let err = cmd.targets(&Registry::new()).unwrap_err();
        assert!(matches!(err, VergeError::UnknownTool { .. }));
    }

    #[test]
    fn targets_unknown_tool_with_min_is_gated() {
        let cmd = CheckCommand::new(check_args(Some("frobnicator"), Some("3.1"), None), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        assert_eq!(specs[0].name, "frobnicator");
        assert_eq!(specs[0].minimum.to_string(), "3.1");
    }

    #[test]
    fn targets_reject_malformed_min() {
        let cmd = CheckCommand::new(check_args(Some("bundler"), Some("not.a.version"), None), false);
        let err = cmd.targets(&Registry::new()).unwrap_err();
        assert!(matches!(err, VergeError::InvalidVersion { .. }));
    }

    #[test]
    fn injected_version_passes_gate() {
        let cmd = CheckCommand::new(check_args(Some("bundler"), None, Some("1.16.5")), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        let report = cmd.check_tool(&specs[0]);
        assert!(report.ok);
        assert_eq!(report.installed.as_deref(), Some("1.16.5"));
        assert!(report.error.is_none());
    }

    #[test]
    fn injected_old_version_fails_gate() {
        let cmd = CheckCommand::new(check_args(Some("bundler"), None, Some("1.16.4")), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        let report = cmd.check_tool(&specs[0]);
        assert!(!report.ok);
        let message = report.error.unwrap();
        assert_eq!(
            message,
            "unsupported bundler version 1.16.4, please use 1.16.5 or more recent"
        );
    }

    #[test]
    fn injected_malformed_version_fails_gate() {
        let cmd = CheckCommand::new(check_args(Some("bundler"), None, Some("1.x.5")), false);
        let specs = cmd.targets(&Registry::new()).unwrap();
        let report = cmd.check_tool(&specs[0]);
        assert!(!report.ok);
        assert!(report.error.unwrap().contains("invalid version string"));
    }

    #[test]
    fn report_serializes_without_error_field_on_pass() {
        let report = CheckReport {
            tool: "bundler".into(),
            minimum: "1.16.5".into(),
            installed: Some("2.4.10".into()),
            ok: true,
            error: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ok\":true"));
        assert!(!json.contains("\"error\""));
    }
}
