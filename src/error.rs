//! Error types for the checked kernels and the performance timer

use thiserror::Error;

/// Errors reported by the checked `try_*` kernels and by [`PerformanceTimer`].
///
/// [`PerformanceTimer`]: crate::timer::PerformanceTimer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompactionError {
    /// A buffer is shorter than the element count passed to the kernel.
    #[error("{buffer} buffer too short: need {required} elements, got {actual}")]
    InvalidLength {
        /// Which buffer was too short (`"input"` or `"output"`).
        buffer: &'static str,
        /// The element count requested by the caller.
        required: usize,
        /// The actual length of the buffer.
        actual: usize,
    },

    /// `start_cpu_timer` was called while an interval was already open.
    #[error("CPU timer already started")]
    TimerAlreadyStarted,

    /// `end_cpu_timer` was called with no open interval.
    #[error("CPU timer not started")]
    TimerNotStarted,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CompactionError>;
