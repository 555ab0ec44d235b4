//! Summary statistic contract.

use crate::logger::Logger;
use anyhow::{Context, Result, ensure};
use ndarray::{Array2, ArrayD, ArrayViewD};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options shared by every summary statistic, fixed at construction.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Average the per-row values over the batch, giving a single summary.
    pub mean_trajectories: bool,
    /// Log initialization and the shapes processed by each computation.
    pub use_logger: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            mean_trajectories: true,
            use_logger: true,
        }
    }
}

/// Reduction of a trajectory batch to a column of summaries.
///
/// `data` has the batch on axis 0 and the reduced dimension (time or replicate) on axis 1.
/// The result is always 2-D with a single column.
pub trait SummaryStatistic: Send + Sync {
    fn name(&self) -> &str;
    fn options(&self) -> SummaryOptions;
    fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>>;
}

/// Fields and post-processing common to all statistics.
pub struct SummaryBase {
    name: &'static str,
    opts: SummaryOptions,
    logger: Arc<dyn Logger>,
}

impl SummaryBase {
    pub fn new(name: &'static str, opts: SummaryOptions, logger: Arc<dyn Logger>) -> Self {
        let base = Self { name, opts, logger };
        base.log(&format!("{name} summary statistic initialized"));
        base
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn options(&self) -> SummaryOptions {
        self.opts
    }

    /// Turn the values reduced along axis 1 into the final column of summaries.
    ///
    /// `reduced` holds one value per row (and per trailing feature).
    pub fn finish(&self, data: &ArrayViewD<f64>, reduced: ArrayD<f64>) -> Result<Array2<f64>> {
        let vals: Vec<f64> = if self.opts.mean_trajectories {
            vec![reduced.mean().unwrap_or(f64::NAN)]
        } else {
            reduced.iter().copied().collect()
        };

        let n_rows = vals.len();
        let res = Array2::from_shape_vec((n_rows, 1), vals)
            .with_context(|| format!("{}: failed to reshape summaries", self.name))?;

        self.log(&format!(
            "{} summary statistic: processed data matrix of shape {:?} and generated summaries of shape {:?}",
            self.name,
            data.shape(),
            res.shape()
        ));

        // Averaging yields 1 row; comparing against the input row count here
        // would reject every multi-row batch.
        let exp_n_rows = if self.opts.mean_trajectories {
            1
        } else {
            data.shape()
                .iter()
                .enumerate()
                .filter(|&(axis, _)| axis != 1)
                .map(|(_, &len)| len)
                .product()
        };
        ensure!(
            res.nrows() == exp_n_rows,
            "{}: expected summaries count mismatch ({} != {exp_n_rows})",
            self.name,
            res.nrows()
        );

        Ok(res)
    }

    fn log(&self, msg: &str) {
        if self.opts.use_logger {
            self.logger.info(msg);
        }
    }
}
