//! Summary statistics over batches of simulated trajectories.
//!
//! A batch is an array with independent runs on axis 0 and time (or replicates) on axis 1.
//! Every [`summary::SummaryStatistic`] reduces axis 1 and returns a column of summaries.

pub mod analysis;
pub mod batch;
pub mod config;
pub mod logger;
pub mod manager;
pub mod stats;
pub mod summary;
mod utils;
