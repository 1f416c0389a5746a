//! Console output formatting.
//!
//! Status lines go to stdout, errors to stderr. Echoed command lines are
//! printed unstyled so they can be copied and rerun.

use crate::domain::BlenderVersion;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Echo a command line before it runs.
pub fn display_command(command_line: &str) {
    println!("{}", command_line);
}

/// Dump a failed command and its captured output to stderr.
pub fn display_failed_command(command: &str, output: &str) {
    eprintln!("{}", command);
    eprintln!("{}", output);
}

/// Display the parsed version and its release state.
pub fn display_version(version: &BlenderVersion) {
    println!("{}", style(version).bold());
    if !version.is_release() {
        println!("  cycle: {}", style(&version.cycle).cyan());
    }
}

/// Display a list of names under a bold heading.
pub fn display_list(heading: &str, items: &[String]) {
    println!("{}", style(heading).bold());
    for item in items {
        println!("  - {}", item);
    }
}
