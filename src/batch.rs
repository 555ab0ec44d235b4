use crate::utils::check_batch;
use anyhow::{Context, Result};
use ndarray::ArrayD;
use rmp_serde::{decode, encode};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Batch of trajectories.
///
/// Axis 0 indexes independent runs and axis 1 is the time (or replicate) axis.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    data: ArrayD<f64>,
}

impl Batch {
    pub fn new(data: ArrayD<f64>) -> Result<Self> {
        check_batch(&data.view()).context("invalid batch")?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Load a MessagePack-encoded batch.
    pub fn load<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);
        let batch: Batch = decode::from_read(&mut reader).context("failed to deserialize batch")?;
        check_batch(&batch.data.view()).context("invalid batch")?;
        Ok(batch)
    }

    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);
        encode::write(&mut writer, &self).context("failed to serialize batch")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }
}
