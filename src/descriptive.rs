//! Descriptive statistics over slices of `f64`
//!
//! `stdev` is defined through `variance`, which is defined through `average`.
//! Empty input is rejected at the innermost call and the error propagates
//! out unchanged, so all three functions fail identically on zero
//! observations.

use crate::error::{StatsError, StatsResult};

/// Arithmetic mean of a non-empty slice.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `values` is empty; a mean is
/// undefined for zero observations and no sentinel is returned in its place.
pub fn average(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { context: "average" });
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Population variance: the mean of squared deviations from the mean.
///
/// Uses the full data set as the population (divisor = count, not count − 1).
///
/// # Errors
///
/// Empty input fails exactly as [`average`] does; the error comes from the
/// internal mean computation.
pub fn variance(values: &[f64]) -> StatsResult<f64> {
    let mean = average(values)?;
    let squared_deviations: Vec<f64> = values
        .iter()
        .map(|x| (x - mean) * (x - mean))
        .collect();
    average(&squared_deviations)
}

/// Population standard deviation: the non-negative square root of
/// [`variance`], in the same units as the data.
///
/// # Errors
///
/// Empty input fails identically to [`variance`].
pub fn stdev(values: &[f64]) -> StatsResult<f64> {
    Ok(variance(values)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_error() {
        assert_eq!(
            average(&[]),
            Err(StatsError::EmptyInput { context: "average" })
        );
    }

    #[test]
    fn test_variance_empty_is_error() {
        // The error propagates from the internal average call.
        assert_eq!(
            variance(&[]),
            Err(StatsError::EmptyInput { context: "average" })
        );
    }

    #[test]
    fn test_stdev_empty_is_error() {
        assert_eq!(
            stdev(&[]),
            Err(StatsError::EmptyInput { context: "average" })
        );
    }

    #[test]
    fn test_average_single_value_is_exact() {
        assert_eq!(average(&[6.9]).unwrap(), 6.9);
    }

    #[test]
    fn test_variance_single_value_is_zero() {
        assert_eq!(variance(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_stdev_constant_sequence_is_zero() {
        assert_eq!(stdev(&[3.0, 3.0, 3.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_average_negative_values() {
        assert_eq!(average(&[-2.0, 0.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_negative_values() {
        // Same spread as [1, 2, 3], just shifted below zero.
        assert_eq!(variance(&[-3.0, -2.0, -1.0]).unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_input_slice_is_not_mutated() {
        let values = vec![5.0, 1.0, 3.0];
        let _ = stdev(&values).unwrap();
        assert_eq!(values, vec![5.0, 1.0, 3.0]);
    }
}
