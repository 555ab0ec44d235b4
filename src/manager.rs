use crate::analysis::Analyzer;
use crate::batch::Batch;
use crate::config::Config;
use crate::logger::facade_logger;
use anyhow::{Context, Result};
use glob::glob;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct Manager {
    work_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();

        let cfg =
            Config::from_file(work_dir.join("config.toml")).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { work_dir, cfg })
    }

    pub fn compute_summaries(&self) -> Result<()> {
        let analyzer = Analyzer::new(&self.cfg, facade_logger());

        let batch_files = self
            .glob_files("batch-*.msgpack")
            .context("failed to glob batch files")?;
        for batch_file in batch_files {
            let Some(idx) = batch_idx(&batch_file) else {
                log::warn!("skipped {batch_file:?}: name is not batch-<index>.msgpack");
                continue;
            };

            let batch =
                Batch::load(&batch_file).with_context(|| format!("failed to load {batch_file:?}"))?;

            let summary_file = self.summary_file(idx);
            analyzer
                .save_results(batch.data().view(), &summary_file)
                .context("failed to save results")?;
            log::info!("saved {summary_file:?}");
        }

        Ok(())
    }

    pub fn clean_summaries(&self) -> Result<()> {
        for summary_file in self.glob_files("summary-*.json")? {
            fs::remove_file(&summary_file)
                .with_context(|| format!("failed to remove {summary_file:?}"))?;
            log::info!("removed {summary_file:?}");
        }

        Ok(())
    }

    fn glob_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let pattern = self.work_dir.join(pattern);
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let files = glob(pattern)
            .context("failed to glob files")?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        Ok(files)
    }

    fn summary_file(&self, batch_idx: usize) -> PathBuf {
        self.work_dir.join(format!("summary-{batch_idx:04}.json"))
    }
}

/// Index encoded in a `batch-<index>.msgpack` file name.
fn batch_idx(batch_file: &Path) -> Option<usize> {
    batch_file
        .file_name()?
        .to_str()?
        .strip_prefix("batch-")?
        .strip_suffix(".msgpack")?
        .parse()
        .ok()
}
