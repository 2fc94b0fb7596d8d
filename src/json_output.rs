//! JSON output format for summary statistics

use crate::summary::Summary;

/// Render a summary as pretty-printed JSON.
pub fn render(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
