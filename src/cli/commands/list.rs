//! List command implementation.
//!
//! The `verge list` command shows the known tools and their minimums.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::Registry;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// One known tool, as listed.
#[derive(Debug, Serialize)]
struct ToolListing {
    name: String,
    minimum: String,
    version_command: String,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn listings(registry: &Registry) -> Vec<ToolListing> {
        registry
            .known_names()
            .into_iter()
            .filter_map(|name| registry.get(name))
            .map(|spec| ToolListing {
                name: spec.name.clone(),
                minimum: spec.minimum.to_string(),
                version_command: spec.version_command(),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = Registry::new();
        let listings = Self::listings(&registry);

        if self.args.json {
            let json = serde_json::to_string_pretty(&listings).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            println!("Known tools:");
            for listing in &listings {
                println!(
                    "{}",
                    display::tool_row(&listing.name, &listing.minimum, &listing.version_command)
                );
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_include_bundler_minimum() {
        let listings = ListCommand::listings(&Registry::new());
        let bundler = listings.iter().find(|l| l.name == "bundler").unwrap();
        assert_eq!(bundler.minimum, "1.16.5");
        assert_eq!(bundler.version_command, "bundler --version");
    }

    #[test]
    fn listings_serialize_to_json() {
        let listings = ListCommand::listings(&Registry::new());
        let json = serde_json::to_string(&listings).unwrap();
        assert!(json.contains("bundler"));
        assert!(json.contains("1.16.5"));
    }
}
