//! Output formatting.
//!
//! Standard output carries only the next version or a one-line error, so
//! scripts can consume it directly. The verbose summary goes to stderr.

use console::style;

use crate::cli::WorkflowResult;

/// Format a one-line error message.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error:").red().bold(), message)
}

/// Print a one-line error message to stdout.
pub fn display_error(message: &str) {
    println!("{}", format_error(message));
}

/// Print the next version tag to stdout.
pub fn display_next_version(tag: &str) {
    println!("{}", tag);
}

/// Format the analysis summary shown with `--verbose`.
///
/// Styled for stderr, where [`display_summary`] writes it.
pub fn format_summary(result: &WorkflowResult, branch: &str, prefix: &str) -> String {
    let next = match result.next_tag(prefix) {
        Some(tag) => style(tag).for_stderr().green().to_string(),
        None => style("no release").for_stderr().yellow().to_string(),
    };

    format!(
        "{} {}{} on '{}', {} unreleased commit(s), {} bump -> {}",
        style("→").for_stderr().yellow(),
        prefix,
        result.previous,
        branch,
        result.commits,
        style(result.bump).for_stderr().bold(),
        next
    )
}

/// Print the analysis summary to stderr.
pub fn display_summary(result: &WorkflowResult, branch: &str, prefix: &str) {
    eprintln!("{}", format_summary(result, branch, prefix));
}
