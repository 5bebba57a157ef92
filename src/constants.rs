//! Centralized constants for the scan and compaction test harness
//!
//! Sizes and value ranges used by tests, benchmarks and the data generators
//! live here rather than scattered through the code.

// ============================================================================
// ARRAY SIZES
// ============================================================================

/// Power-of-two array size used by the correctness harness
pub const SIZE: usize = 1 << 8;

/// Non-power-of-two size, checked alongside [`SIZE`]
pub const NPOT: usize = SIZE - 3;

/// Array sizes swept by the benchmarks
pub const BENCH_SIZES: [usize; 4] = [1 << 10, 1 << 14, 1 << 18, (1 << 18) - 3];

// ============================================================================
// TEST DATA
// ============================================================================

/// Exclusive upper bound for generated scan inputs
pub const MAX_VALUE: i32 = 50;

/// Exclusive upper bound for generated compaction inputs, small enough that
/// roughly a quarter of the elements are zero
pub const COMPACT_MAX_VALUE: i32 = 4;

/// Seed for reproducible test data
pub const DEFAULT_SEED: u64 = 0x5ca1_ab1e;

/// Maximum number of entries shown when formatting an array
pub const PRINT_LIMIT: usize = 16;
