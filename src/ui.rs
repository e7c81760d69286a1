//! Terminal output for diagnostics.
//!
//! Everything here writes to stderr; stdout is reserved for the computed
//! version so the tool can be used in `$(...)` substitutions.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning in yellow.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Render an error and its causes, one "Caused by" line per level.
pub fn format_error_chain(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    for (level, cause) in err.chain().skip(1).enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{:indent$}Caused by: {}",
            "",
            cause,
            indent = (level + 1) * 2
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_format_error_chain_single() {
        let err = anyhow::anyhow!("registry unreachable");
        assert_eq!(format_error_chain(&err), "registry unreachable");
    }

    #[test]
    fn test_format_error_chain_nested() {
        let err = Err::<(), _>(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "tags.txt missing",
        ))
        .context("Failed to list tags")
        .unwrap_err();

        assert_eq!(
            format_error_chain(&err),
            "Failed to list tags\n  Caused by: tags.txt missing"
        );
    }
}
