use crate::intermediate::Intermediate;

/// Format converter output as plain text, one block per paragraph.
pub fn format_text(intermediate: &Intermediate) -> String {
    let mut lines = Vec::new();
    for section in intermediate.sections() {
        lines.push(format!("[{}]", section.name));
        for block in &section.blocks {
            lines.push(block.to_string());
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Format a simple summary of section and block counts.
pub fn format_summary(intermediate: &Intermediate) -> String {
    let per_section: Vec<String> = intermediate
        .sections()
        .iter()
        .map(|s| format!("{}={}", s.name, s.blocks.len()))
        .collect();
    format!(
        "sections={} blocks={} {}",
        intermediate.sections().len(),
        intermediate.block_count(),
        per_section.join(" ")
    )
    .trim_end()
    .to_string()
}
