//! Tool registry and definitions.
//!
//! Defines which dependency-management tools Verge knows how to gate: the
//! command that reports their version and the minimum version they must
//! meet. The registry holds built-in tools plus any ad-hoc tools supplied
//! on the command line with an explicit minimum.

use std::collections::HashMap;

use crate::version::Version;

/// A gated tool definition.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool binary name (e.g., "bundler").
    pub name: String,
    /// Arguments that make the tool print its version.
    pub version_args: Vec<String>,
    /// Minimum version the gate enforces.
    pub minimum: Version,
}

impl ToolSpec {
    /// Create a spec with the conventional `--version` probe command.
    pub fn new(name: impl Into<String>, minimum: Version) -> Self {
        Self {
            name: name.into(),
            version_args: vec!["--version".to_string()],
            minimum,
        }
    }

    /// Override the version-probe arguments.
    pub fn with_version_args(mut self, args: Vec<String>) -> Self {
        self.version_args = args;
        self
    }

    /// The full probe command line, for display.
    pub fn version_command(&self) -> String {
        let mut parts = vec![self.name.clone()];
        parts.extend(self.version_args.iter().cloned());
        parts.join(" ")
    }
}

/// Built-in tool definition, kept as static data.
struct BuiltinDef {
    name: &'static str,
    version_args: &'static [&'static str],
    minimum: &'static [u64],
}

/// Known dependency managers and the minimums they must meet.
const BUILTIN_DEFS: &[BuiltinDef] = &[
    BuiltinDef {
        name: "bundler",
        version_args: &["--version"],
        minimum: &[1, 16, 5],
    },
];

/// Registry of all known tools.
pub struct Registry {
    tools: HashMap<String, ToolSpec>,
}

impl Registry {
    /// Create a registry with the built-in tools.
    pub fn new() -> Self {
        let mut tools = HashMap::new();
        for def in BUILTIN_DEFS {
            let spec = ToolSpec {
                name: def.name.to_string(),
                version_args: def.version_args.iter().map(|s| s.to_string()).collect(),
                minimum: Version::new(def.minimum.to_vec()),
            };
            tools.insert(def.name.to_string(), spec);
        }
        Self { tools }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// Add or replace a tool definition.
    pub fn register(&mut self, spec: ToolSpec) {
        self.tools.insert(spec.name.clone(), spec);
    }

    /// Names of all known tools, sorted for stable output.
    pub fn known_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
