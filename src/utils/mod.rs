//! Utility functions for building and comparing test arrays

use std::fmt::Debug;

use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::PRINT_LIMIT;

/// Generates `n` values in `[0, max)` from a seeded RNG
///
/// The same `seed` always yields the same array.
///
/// # Panics
///
/// Panics if `max` is not positive, since the range `[0, max)` would be empty.
pub fn gen_array(n: usize, max: i32, seed: u64) -> Vec<i32> {
    assert!(max > 0, "max must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..max)).collect()
}

/// Resets `data[0..n)` to zero
pub fn zero_fill<T: Zero + Copy>(n: usize, data: &mut [T]) {
    data[..n].fill(T::zero());
}

/// Number of non-zero entries in `data[0..n)`
pub fn count_nonzero<T: Zero>(n: usize, data: &[T]) -> usize {
    data[..n].iter().filter(|v| !v.is_zero()).count()
}

/// Compares `a[0..n)` with `b[0..n)`
///
/// Returns the index of the first mismatch, or `None` if they agree.
pub fn cmp_arrays<T: PartialEq>(n: usize, a: &[T], b: &[T]) -> Option<usize> {
    a[..n].iter().zip(&b[..n]).position(|(x, y)| x != y)
}

/// Formats `data[0..n)` as `[ a, b, c ]`, eliding entries past
/// [`PRINT_LIMIT`]
pub fn format_array<T: Debug>(n: usize, data: &[T]) -> String {
    let shown = n.min(PRINT_LIMIT);
    let mut parts: Vec<String> = data[..shown].iter().map(|v| format!("{:?}", v)).collect();
    if n > shown {
        parts.push(format!("... ({} more)", n - shown));
    }
    format!("[ {} ]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_array_is_reproducible() {
        let a = gen_array(64, 50, 7);
        let b = gen_array(64, 50, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0..50).contains(&v)));
    }

    #[test]
    fn test_gen_array_empty() {
        assert!(gen_array(0, 10, 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "max must be positive")]
    fn test_gen_array_rejects_empty_range() {
        gen_array(4, 0, 1);
    }

    #[test]
    fn test_zero_fill_prefix() {
        let mut data = [1, 2, 3, 4];
        zero_fill(2, &mut data);
        assert_eq!(data, [0, 0, 3, 4]);
    }

    #[test]
    fn test_count_nonzero() {
        assert_eq!(count_nonzero(5, &[1, 0, 3, 0, 5]), 3);
        assert_eq!(count_nonzero(2, &[0, 0, 9]), 0);
    }

    #[test]
    fn test_cmp_arrays() {
        assert_eq!(cmp_arrays(3, &[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(cmp_arrays(3, &[1, 2, 3], &[1, 5, 3]), Some(1));
        // Only the first n entries count
        assert_eq!(cmp_arrays(2, &[1, 2, 3], &[1, 2, 4]), None);
    }

    #[test]
    fn test_format_array() {
        assert_eq!(format_array(3, &[1, 0, 3]), "[ 1, 0, 3 ]");
        assert_eq!(format_array(0, &[1]), "[  ]");

        let long: Vec<i32> = (0..20).collect();
        let text = format_array(20, &long);
        assert!(text.ends_with("... (4 more) ]"));
        assert!(text.starts_with("[ 0, 1, 2"));
    }
}
