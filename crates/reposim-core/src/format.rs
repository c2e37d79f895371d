//! Shared formatting helpers for scores and records output

/// Format a score in [0, 1] with fixed precision
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Quote a value for records output when it contains whitespace or quotes
pub fn escape_record_value(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) || value.contains('"') {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
