//! CSV output format for summary statistics
//!
//! One header row and one data row, for spreadsheet import and machine
//! parsing. Numeric fields use Rust's shortest-round-trip float formatting.

use crate::summary::Summary;

/// Column order for the CSV report.
const COLUMNS: [&str; 4] = ["count", "mean", "variance", "stdev"];

/// Render a summary as a two-line CSV document.
pub fn render(summary: &Summary) -> String {
    let header = COLUMNS.join(",");
    format!(
        "{}\n{},{},{},{}\n",
        header, summary.count, summary.mean, summary.variance, summary.stdev
    )
}
