//! Wall-clock timing for benchmarking the CPU kernels
//!
//! A [`PerformanceTimer`] is an explicit value owned by the caller rather than
//! process-wide state. It brackets one interval at a time and remembers the
//! duration of the last completed one.

use std::time::{Duration, Instant};

use log::debug;

use crate::error::{CompactionError, Result};

/// Start/stop timer for the CPU kernels
///
/// ```
/// use stream_compaction::PerformanceTimer;
///
/// let mut timer = PerformanceTimer::new();
/// let sum: i32 = timer.time(|| (1..=10).sum()).unwrap();
/// assert_eq!(sum, 55);
/// assert!(timer.cpu_elapsed_for_previous_operation() >= 0.0);
/// ```
#[derive(Debug, Default)]
pub struct PerformanceTimer {
    started: Option<Instant>,
    previous: Duration,
}

impl PerformanceTimer {
    /// Creates an idle timer with no recorded interval
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an interval
    ///
    /// Fails with [`CompactionError::TimerAlreadyStarted`] if an interval is
    /// already open; the open interval is kept.
    pub fn start_cpu_timer(&mut self) -> Result<()> {
        if self.started.is_some() {
            return Err(CompactionError::TimerAlreadyStarted);
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Closes the open interval and records its duration
    pub fn end_cpu_timer(&mut self) -> Result<()> {
        let start = self.started.take().ok_or(CompactionError::TimerNotStarted)?;
        self.previous = start.elapsed();
        debug!(
            "cpu timer: {:.6} ms",
            self.cpu_elapsed_for_previous_operation()
        );
        Ok(())
    }

    /// Whether an interval is currently open
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Duration of the last completed interval in milliseconds (0.0 if none)
    pub fn cpu_elapsed_for_previous_operation(&self) -> f64 {
        self.previous.as_secs_f64() * 1000.0
    }

    /// Duration of the last completed interval
    pub fn previous_duration(&self) -> Duration {
        self.previous
    }

    /// Runs `f` inside a single start/stop bracket and returns its value
    pub fn time<R, F>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce() -> R,
    {
        self.start_cpu_timer()?;
        let result = f();
        self.end_cpu_timer()?;
        Ok(result)
    }
}
