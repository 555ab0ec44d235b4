use crate::config::Config;
use crate::logger::Logger;
use crate::summary::SummaryStatistic;
use anyhow::{Context, Result};
use ndarray::{Array2, ArrayViewD, Axis, concatenate};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::Arc,
};

/// Ordered set of statistics computed over the same batch.
pub struct Analyzer {
    stat_ptr_vec: Vec<Box<dyn SummaryStatistic>>,
}

impl Analyzer {
    pub fn new(cfg: &Config, logger: Arc<dyn Logger>) -> Self {
        let stat_ptr_vec = cfg
            .statistics
            .iter()
            .map(|kind| kind.build(cfg.options, logger.clone()))
            .collect();
        Self { stat_ptr_vec }
    }

    pub fn names(&self) -> Vec<&str> {
        self.stat_ptr_vec.iter().map(|stat| stat.name()).collect()
    }

    /// Compute every statistic and place their columns side by side.
    pub fn compute(&self, data: ArrayViewD<f64>) -> Result<Array2<f64>> {
        let cols = self.compute_cols(data)?;
        let views: Vec<_> = cols.iter().map(|col| col.view()).collect();
        concatenate(Axis(1), &views).context("failed to concatenate summaries")
    }

    pub fn report(&self, data: ArrayViewD<f64>) -> Result<serde_json::Value> {
        let cols = self.compute_cols(data)?;
        let report: serde_json::Map<_, _> = self
            .stat_ptr_vec
            .iter()
            .zip(cols)
            .map(|(stat, col)| {
                let vals: Vec<f64> = col.iter().copied().collect();
                (stat.name().to_string(), serde_json::json!(vals))
            })
            .collect();
        Ok(serde_json::Value::Object(report))
    }

    pub fn save_results<P: AsRef<Path>>(&self, data: ArrayViewD<f64>, file: P) -> Result<()> {
        let report = self.report(data).context("failed to compute report")?;

        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &report).context("failed to serialize report")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }

    fn compute_cols(&self, data: ArrayViewD<f64>) -> Result<Vec<Array2<f64>>> {
        self.stat_ptr_vec
            .iter()
            .map(|stat| {
                stat.compute(data.view())
                    .with_context(|| format!("failed to compute {}", stat.name()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::testing::RecordingLogger;
    use crate::stats::StatKind;
    use crate::summary::SummaryOptions;
    use ndarray::array;

    fn analyzer(mean_trajectories: bool) -> Analyzer {
        let cfg = Config {
            statistics: vec![StatKind::GlobalMin, StatKind::GlobalMax],
            options: SummaryOptions {
                mean_trajectories,
                use_logger: false,
            },
        };
        Analyzer::new(&cfg, Arc::new(RecordingLogger::default()))
    }

    #[test]
    fn columns_follow_config_order() {
        let data = array![[5.0, 2.0, 9.0, 1.0], [0.0, -3.0, 4.0, 2.0]].into_dyn();
        let ana = analyzer(false);
        assert_eq!(ana.names(), vec!["GlobalMin", "GlobalMax"]);

        let res = ana.compute(data.view()).unwrap();
        assert_eq!(res, array![[1.0, 9.0], [-3.0, 4.0]]);

        let res = analyzer(true).compute(data.view()).unwrap();
        assert_eq!(res, array![[-1.0, 6.5]]);
    }

    #[test]
    fn report_maps_names_to_values() {
        let data = array![[3.0, 1.0], [2.0, 8.0]].into_dyn();
        let report = analyzer(false).report(data.view()).unwrap();
        assert_eq!(report["GlobalMin"], serde_json::json!([1.0, 2.0]));
        assert_eq!(report["GlobalMax"], serde_json::json!([3.0, 8.0]));
    }

    #[test]
    fn errors_name_the_statistic() {
        let data = array![1.0, 2.0].into_dyn();
        let err = analyzer(false).compute(data.view()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to compute GlobalMin"));
    }
}
