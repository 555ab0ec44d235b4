use crate::stats::StatKind;
use crate::summary::SummaryOptions;
use crate::utils::check_num;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

/// Summary computation configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Statistics to compute, in output column order.
    pub statistics: Vec<StatKind>,

    /// Options applied to every statistic.
    #[serde(default)]
    pub options: SummaryOptions,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.statistics.len(), 1..).context("invalid number of statistics")?;

        let mut seen = HashSet::new();
        for kind in &self.statistics {
            if !seen.insert(kind) {
                bail!("statistic {kind:?} is listed more than once");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let cfg = Config::parse(
            r#"
statistics = ["global_min", "temporal_variance"]

[options]
mean_trajectories = false
use_logger = false
"#,
        )
        .unwrap();
        assert_eq!(
            cfg.statistics,
            vec![StatKind::GlobalMin, StatKind::TemporalVariance]
        );
        assert!(!cfg.options.mean_trajectories);
        assert!(!cfg.options.use_logger);
    }

    #[test]
    fn missing_options_use_defaults() {
        let cfg = Config::parse("statistics = [\"global_max\"]\n").unwrap();
        assert_eq!(cfg.options, SummaryOptions::default());

        let cfg = Config::parse(
            "statistics = [\"global_max\"]\n[options]\nmean_trajectories = false\n",
        )
        .unwrap();
        assert!(!cfg.options.mean_trajectories);
        assert!(cfg.options.use_logger);
    }

    #[test]
    fn reject_invalid_configs() {
        assert!(Config::parse("statistics = []\n").is_err());
        assert!(Config::parse("statistics = [\"global_min\", \"global_min\"]\n").is_err());
        assert!(Config::parse("statistics = [\"burstiness\"]\n").is_err());
    }
}
