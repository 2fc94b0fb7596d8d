//! Summary statistics for a single data set

use serde::{Deserialize, Serialize};

use crate::descriptive::{average, stdev, variance};
use crate::error::StatsResult;

/// Descriptive summary of one numeric data set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divisor = count)
    pub variance: f64,
    /// Population standard deviation
    pub stdev: f64,
}

impl Summary {
    /// Compute all summary statistics for `values`.
    ///
    /// Fails with [`crate::error::StatsError::EmptyInput`] on an empty
    /// slice, exactly as the individual functions do.
    pub fn compute(values: &[f64]) -> StatsResult<Self> {
        Ok(Self {
            count: values.len(),
            mean: average(values)?,
            variance: variance(values)?,
            stdev: stdev(values)?,
        })
    }

    /// Render the summary as an aligned human-readable block.
    pub fn render_text(&self) -> String {
        format!(
            "Count:     {}\n\
             Mean:      {:.6}\n\
             Variance:  {:.6}\n\
             Std Dev:   {:.6}\n",
            self.count, self.mean, self.variance, self.stdev
        )
    }
}
