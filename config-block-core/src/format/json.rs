use crate::intermediate::Intermediate;

/// Format converter output as JSON.
pub fn format_json(intermediate: &Intermediate) -> String {
    serde_json::to_string_pretty(intermediate).unwrap_or_else(|_| "[]".to_string())
}
