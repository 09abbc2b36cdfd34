use colored::Colorize;
use config_block_core::{format_summary, format_text};

use crate::backend::{Conversion, ConversionWarning};

/// Render the converted blocks for terminal output: section headers in
/// cyan, block headers in green.
pub fn render_text(conversion: &Conversion) -> String {
    let raw = format_text(&conversion.intermediate);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('[') {
            line.cyan().bold().to_string()
        } else if !line.is_empty() && !line.starts_with(' ') {
            line.green().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// One-line summary: backend, converters that ran and block counts.
pub fn render_summary(conversion: &Conversion) -> String {
    format!(
        "backend={} converters={} {}",
        conversion.kind.as_str(),
        conversion.ran.join(","),
        format_summary(&conversion.intermediate)
    )
    .cyan()
    .to_string()
}

/// Warning lines, prefixed with the converter that raised them.
pub fn render_warnings(warnings: &[ConversionWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("{} [{}] {}", "warning:".yellow(), w.converter, w.message))
        .collect::<Vec<_>>()
        .join("\n")
}
