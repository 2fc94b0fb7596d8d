//! Input parsing for the promedio CLI
//!
//! Accepts decimal numbers separated by whitespace and/or commas, so both
//! `promedio 1 2 3` and a file containing `1, 2, 3` parse the same way.

use crate::error::{StatsError, StatsResult};

/// Parse a blob of text into the numbers it contains.
///
/// Empty input parses to an empty vector; deciding whether that is an error
/// is left to the statistics layer. Any token that does not parse as `f64`
/// is rejected.
pub fn parse_values(text: &str) -> StatsResult<Vec<f64>> {
    let mut values = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| StatsError::InvalidNumber {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}
