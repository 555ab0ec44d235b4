use anyhow::{Result, bail};
use ndarray::{ArrayViewD, Axis};
use std::{fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }

    Ok(())
}

/// Check that `data` is a trajectory batch: rank of at least 2 and a non-empty reduction axis.
pub fn check_batch(data: &ArrayViewD<f64>) -> Result<()> {
    let ndim = data.ndim();
    if ndim < 2 {
        bail!("batch must have at least 2 dimensions, but has {ndim}");
    }

    if data.len_of(Axis(1)) == 0 {
        bail!("batch reduction axis must be non-empty, shape is {:?}", data.shape());
    }

    Ok(())
}
