//! # stream-compaction: sequential scan and compaction kernels
//!
//! Reference single-threaded implementations of two array primitives that
//! parallel and GPU implementations are validated against:
//!
//! - **Exclusive scan**: `out[i]` is the sum of all inputs before `i`
//! - **Stream compaction**: drop zero elements, keep the rest in order
//!
//! Compaction comes in two forms that must always agree: a direct
//! single-pass filter, and the mask → scan → scatter decomposition that
//! parallel versions are built on.
//!
//! ## Usage
//!
//! ```
//! use stream_compaction::cpu;
//!
//! let idata = [1, 0, 3, 0, 5];
//! let mut odata = [0; 5];
//!
//! cpu::scan(5, &mut odata, &idata);
//! assert_eq!(odata, [0, 1, 1, 4, 4]);
//!
//! let k = cpu::compact_with_scan(5, &mut odata, &idata);
//! assert_eq!(&odata[..k], &[1, 3, 5]);
//! ```
//!
//! Timing is kept outside the kernels. Wrap calls with a caller-owned
//! [`PerformanceTimer`], directly or through [`TimedCpu`]:
//!
//! ```
//! use stream_compaction::{cpu, PerformanceTimer};
//!
//! let idata = [2, 3, 4];
//! let mut odata = [0; 3];
//! let mut timer = PerformanceTimer::new();
//!
//! let k = timer
//!     .time(|| cpu::compact_without_scan(3, &mut odata, &idata))
//!     .unwrap();
//! assert_eq!(k, 3);
//! println!("{:.4} ms", timer.cpu_elapsed_for_previous_operation());
//! ```

pub mod constants;
pub mod cpu;
pub mod error;
pub mod timer;
pub mod utils;

// Re-export primary components
pub use cpu::{compact_with_scan, compact_without_scan, scan, TimedCpu};
pub use cpu::{try_compact_with_scan, try_compact_without_scan, try_scan};
pub use error::CompactionError;
pub use timer::PerformanceTimer;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
