use thrive_core::models::assessment::SeverityBracket;

/// Classify a total score against the server-supplied brackets.
pub fn bracket_for(score: i32, ranges: &[SeverityBracket]) -> Option<&str> {
    ranges
        .iter()
        .find(|r| score >= r.min && score <= r.max)
        .map(|r| r.label.as_str())
}

/// Display color for a severity label. This is the one place the client
/// keys anything off severity text; the brackets themselves are server
/// data.
pub fn severity_color(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    if lower.contains("minimal") || lower.contains("none") {
        "#22c55e"
    } else if lower.contains("mild") {
        "#eab308"
    } else if lower.contains("moderately severe") {
        "#f97316"
    } else if lower.contains("moderate") {
        "#f59e0b"
    } else if lower.contains("severe") || lower.contains("high") {
        "#ef4444"
    } else {
        "#6b7280"
    }
}
