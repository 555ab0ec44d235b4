use crate::logger::Logger;
use crate::summary::{SummaryBase, SummaryOptions, SummaryStatistic};
use crate::utils::check_batch;
use anyhow::Result;
use ndarray::{Array2, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn nan_min(acc: f64, val: f64) -> f64 {
    if acc.is_nan() || val.is_nan() {
        f64::NAN
    } else {
        acc.min(val)
    }
}

fn nan_max(acc: f64, val: f64) -> f64 {
    if acc.is_nan() || val.is_nan() {
        f64::NAN
    } else {
        acc.max(val)
    }
}

/// The minimum value observed across the entire time span.
pub struct GlobalMin {
    base: SummaryBase,
}

impl GlobalMin {
    pub const NAME: &'static str = "GlobalMin";

    pub fn new(opts: SummaryOptions, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: SummaryBase::new(Self::NAME, opts, logger),
        }
    }
}

impl SummaryStatistic for GlobalMin {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn options(&self) -> SummaryOptions {
        self.base.options()
    }

    fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>> {
        check_batch(&data)?;
        let mins = data.fold_axis(Axis(1), f64::INFINITY, |&acc, &val| nan_min(acc, val));
        self.base.finish(&data, mins)
    }
}

/// The maximum value observed across the entire time span.
pub struct GlobalMax {
    base: SummaryBase,
}

impl GlobalMax {
    pub const NAME: &'static str = "GlobalMax";

    pub fn new(opts: SummaryOptions, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: SummaryBase::new(Self::NAME, opts, logger),
        }
    }
}

impl SummaryStatistic for GlobalMax {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn options(&self) -> SummaryOptions {
        self.base.options()
    }

    fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>> {
        check_batch(&data)?;
        let maxs = data.fold_axis(Axis(1), f64::NEG_INFINITY, |&acc, &val| nan_max(acc, val));
        self.base.finish(&data, maxs)
    }
}

/// The mean value over the time span.
pub struct TemporalMean {
    base: SummaryBase,
}

impl TemporalMean {
    pub const NAME: &'static str = "TemporalMean";

    pub fn new(opts: SummaryOptions, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: SummaryBase::new(Self::NAME, opts, logger),
        }
    }
}

impl SummaryStatistic for TemporalMean {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn options(&self) -> SummaryOptions {
        self.base.options()
    }

    fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>> {
        check_batch(&data)?;
        let means = data.map_axis(Axis(1), |lane| lane.mean().unwrap_or(f64::NAN));
        self.base.finish(&data, means)
    }
}

/// The population variance over the time span.
pub struct TemporalVariance {
    base: SummaryBase,
}

impl TemporalVariance {
    pub const NAME: &'static str = "TemporalVariance";

    pub fn new(opts: SummaryOptions, logger: Arc<dyn Logger>) -> Self {
        Self {
            base: SummaryBase::new(Self::NAME, opts, logger),
        }
    }
}

impl SummaryStatistic for TemporalVariance {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn options(&self) -> SummaryOptions {
        self.base.options()
    }

    fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>> {
        check_batch(&data)?;
        let vars = data.map_axis(Axis(1), |lane| lane.var(0.0));
        self.base.finish(&data, vars)
    }
}

/// Statistic selector used in configuration files.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    GlobalMin,
    GlobalMax,
    TemporalMean,
    TemporalVariance,
}

impl StatKind {
    pub fn build(self, opts: SummaryOptions, logger: Arc<dyn Logger>) -> Box<dyn SummaryStatistic> {
        match self {
            StatKind::GlobalMin => Box::new(GlobalMin::new(opts, logger)),
            StatKind::GlobalMax => Box::new(GlobalMax::new(opts, logger)),
            StatKind::TemporalMean => Box::new(TemporalMean::new(opts, logger)),
            StatKind::TemporalVariance => Box::new(TemporalVariance::new(opts, logger)),
        }
    }
}
