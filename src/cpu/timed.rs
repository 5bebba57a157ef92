//! Timed wrappers around the CPU kernels
//!
//! Each call is bracketed exactly once. `compact_with_scan` runs the pure
//! scan internally, so its measurement covers mask, scan and scatter together
//! and nothing is counted twice.

use num_traits::{Num, WrappingAdd};

use crate::error::Result;
use crate::timer::PerformanceTimer;

/// The CPU kernels bound to a caller-owned [`PerformanceTimer`]
///
/// ```
/// use stream_compaction::{PerformanceTimer, TimedCpu};
///
/// let mut timer = PerformanceTimer::new();
/// let mut cpu = TimedCpu::new(&mut timer);
///
/// let idata = [1, 0, 3, 0, 5];
/// let mut odata = [0; 5];
/// let count = cpu.compact_with_scan(5, &mut odata, &idata).unwrap();
/// assert_eq!(&odata[..count], &[1, 3, 5]);
/// assert!(cpu.elapsed_ms() >= 0.0);
/// ```
pub struct TimedCpu<'t> {
    timer: &'t mut PerformanceTimer,
}

impl<'t> TimedCpu<'t> {
    /// Binds the kernels to `timer`
    pub fn new(timer: &'t mut PerformanceTimer) -> Self {
        Self { timer }
    }

    /// Elapsed milliseconds of the most recent timed call
    pub fn elapsed_ms(&self) -> f64 {
        self.timer.cpu_elapsed_for_previous_operation()
    }

    /// [`super::scan`] inside one timer bracket
    pub fn scan<T>(&mut self, n: usize, odata: &mut [T], idata: &[T]) -> Result<()>
    where
        T: Copy + Num + WrappingAdd,
    {
        self.timer.time(|| super::scan(n, odata, idata))
    }

    /// [`super::compact_without_scan`] inside one timer bracket
    pub fn compact_without_scan<T>(&mut self, n: usize, odata: &mut [T], idata: &[T]) -> Result<usize>
    where
        T: Copy + Num,
    {
        self.timer.time(|| super::compact_without_scan(n, odata, idata))
    }

    /// [`super::compact_with_scan`] inside one timer bracket, covering mask,
    /// scan and scatter
    pub fn compact_with_scan<T>(&mut self, n: usize, odata: &mut [T], idata: &[T]) -> Result<usize>
    where
        T: Copy + Num,
    {
        self.timer.time(|| super::compact_with_scan(n, odata, idata))
    }
}
