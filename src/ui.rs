//! Terminal output for the command-line tool.
//!
//! The version itself goes to stdout unstyled so it can be captured by build
//! scripts; everything else is styled and goes to stderr.

use console::style;

use crate::domain::Version;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print the derived version to stdout.
pub fn display_version(version: &Version) {
    println!("{}", version);
}

/// Describe how a version was derived, one field per line.
pub fn format_details(version: &Version) -> Vec<String> {
    let tag = version
        .latest_version_tag
        .as_ref()
        .map(|tag| tag.name.clone())
        .unwrap_or_else(|| "(none, default version)".to_string());

    let commit = if version.commit_hash.is_zero() {
        "-".to_string()
    } else {
        version.commit_hash.to_hex()
    };

    vec![
        format!("tag:           {}", tag),
        format!("commits ahead: {}", version.commits_ahead),
        format!("commit:        {}", commit),
    ]
}

pub fn display_details(version: &Version) {
    for line in format_details(version) {
        eprintln!("  {}", style(line).dim());
    }
}
