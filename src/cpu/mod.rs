//! Sequential CPU kernels for exclusive scan and stream compaction
//!
//! These are the ground-truth implementations that accelerated variants are
//! checked against. Every kernel reads `idata[0..n)`, writes into
//! `odata[0..n)` and keeps no state between calls.
//!
//! The unchecked kernels leave bounds to the caller: a slice shorter than `n`
//! panics through ordinary slice indexing. The `try_*` kernels validate both
//! lengths first and report [`CompactionError::InvalidLength`].

pub mod timed;

use log::{debug, trace};
use num_traits::{Num, WrappingAdd};

use crate::error::{CompactionError, Result};

pub use timed::TimedCpu;

/// Computes an exclusive prefix sum of `idata[0..n)` into `odata[0..n)`.
///
/// `odata[0]` is always zero and `odata[i]` is the sum of `idata[0..i)`.
/// Nothing is written when `n == 0`. Sums wrap on overflow, the same as
/// `int` arithmetic in the accelerated kernels, and the total of all `n`
/// inputs is never formed.
///
/// # Examples
///
/// ```
/// use stream_compaction::cpu::scan;
///
/// let idata = [1, 0, 3, 0, 5];
/// let mut odata = [0; 5];
/// scan(5, &mut odata, &idata);
/// assert_eq!(odata, [0, 1, 1, 4, 4]);
/// ```
pub fn scan<T>(n: usize, odata: &mut [T], idata: &[T])
where
    T: Copy + Num + WrappingAdd,
{
    trace!("cpu::scan n={}", n);

    if n == 0 {
        return;
    }

    odata[0] = T::zero();
    for i in 1..n {
        odata[i] = odata[i - 1].wrapping_add(&idata[i - 1]);
    }
}

/// Copies the non-zero elements of `idata[0..n)` into `odata`, in order,
/// with a single pass and a write cursor.
///
/// Returns the number of retained elements `k`. Only `odata[0..k)` is
/// written; the rest of `odata` is left as it was.
///
/// # Examples
///
/// ```
/// use stream_compaction::cpu::compact_without_scan;
///
/// let idata = [1, 0, 3, 0, 5];
/// let mut odata = [0; 5];
/// let k = compact_without_scan(5, &mut odata, &idata);
/// assert_eq!(&odata[..k], &[1, 3, 5]);
/// ```
pub fn compact_without_scan<T>(n: usize, odata: &mut [T], idata: &[T]) -> usize
where
    T: Copy + Num,
{
    trace!("cpu::compact_without_scan n={}", n);

    let mut cursor = 0;
    for &val in &idata[..n] {
        if !val.is_zero() {
            odata[cursor] = val;
            cursor += 1;
        }
    }

    debug!("cpu::compact_without_scan kept {} of {}", cursor, n);
    cursor
}

/// Stream compaction through mask, scan and scatter.
///
/// Produces the same count and the same retained prefix as
/// [`compact_without_scan`], but goes through the decomposition used by
/// parallel implementations:
///
/// 1. `mask[i] = 1` if `idata[i]` is non-zero, else `0`
/// 2. `indices = scan(mask)` gives each retained element its destination
/// 3. every masked element is scattered to `odata[indices[i]]`
///
/// The mask and index buffers are scratch owned by this call.
pub fn compact_with_scan<T>(n: usize, odata: &mut [T], idata: &[T]) -> usize
where
    T: Copy + Num,
{
    trace!("cpu::compact_with_scan n={}", n);

    if n == 0 {
        return 0;
    }

    let mask: Vec<usize> = idata[..n]
        .iter()
        .map(|val| usize::from(!val.is_zero()))
        .collect();

    let mut indices = vec![0usize; n];
    scan(n, &mut indices, &mask);

    for ((&val, &bit), &dst) in idata[..n].iter().zip(&mask).zip(&indices) {
        if bit == 1 {
            odata[dst] = val;
        }
    }

    let count = indices[n - 1] + mask[n - 1];
    debug!("cpu::compact_with_scan kept {} of {}", count, n);
    count
}

/// Checked [`scan`]: fails instead of panicking when a buffer is short.
pub fn try_scan<T>(n: usize, odata: &mut [T], idata: &[T]) -> Result<()>
where
    T: Copy + Num + WrappingAdd,
{
    check_lengths(n, odata.len(), idata.len())?;
    scan(n, odata, idata);
    Ok(())
}

/// Checked [`compact_without_scan`].
pub fn try_compact_without_scan<T>(n: usize, odata: &mut [T], idata: &[T]) -> Result<usize>
where
    T: Copy + Num,
{
    check_lengths(n, odata.len(), idata.len())?;
    Ok(compact_without_scan(n, odata, idata))
}

/// Checked [`compact_with_scan`].
pub fn try_compact_with_scan<T>(n: usize, odata: &mut [T], idata: &[T]) -> Result<usize>
where
    T: Copy + Num,
{
    check_lengths(n, odata.len(), idata.len())?;
    Ok(compact_with_scan(n, odata, idata))
}

fn check_lengths(n: usize, out_len: usize, in_len: usize) -> Result<()> {
    if in_len < n {
        return Err(CompactionError::InvalidLength {
            buffer: "input",
            required: n,
            actual: in_len,
        });
    }
    if out_len < n {
        return Err(CompactionError::InvalidLength {
            buffer: "output",
            required: n,
            actual: out_len,
        });
    }
    Ok(())
}
