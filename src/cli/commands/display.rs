//! Shared display helpers for gate outcome formatting.
//!
//! These helpers are used by `check` and `list` so passing and failing
//! gates render consistently. Only the icon is styled; the message text
//! stays plain so it can be matched and piped.

use console::style;

/// Render a passing gate line.
pub fn pass_line(tool: &str, installed: &str, minimum: &str) -> String {
    format!(
        "{} {} {} (minimum {})",
        style("✓").green(),
        tool,
        installed,
        minimum
    )
}

/// Render a failing gate line from an error message.
pub fn fail_line(message: &str) -> String {
    format!("{} {}", style("✗").red(), message)
}

/// Render one row of the known-tool listing.
pub fn tool_row(name: &str, minimum: &str, version_command: &str) -> String {
    format!(
        "  {:<12} >= {:<10} ({})",
        style(name).bold(),
        minimum,
        version_command
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_line_contains_versions() {
        let line = pass_line("bundler", "2.4.10", "1.16.5");
        assert!(line.contains("bundler"));
        assert!(line.contains("2.4.10"));
        assert!(line.contains("1.16.5"));
    }

    #[test]
    fn fail_line_contains_message() {
        let line = fail_line("unsupported bundler version 1.16.4");
        assert!(line.contains("unsupported bundler version 1.16.4"));
    }

    #[test]
    fn tool_row_contains_fields() {
        let row = tool_row("bundler", "1.16.5", "bundler --version");
        assert!(row.contains("bundler"));
        assert!(row.contains("1.16.5"));
        assert!(row.contains("bundler --version"));
    }
}
