//! Scalar helpers that shape a normalized progress value.

use std::f64::consts::PI;

/// `max(0, s - i/n)`: progress remaining after the first `i` of `n` slices.
pub fn max_scale(s: f64, i: usize, n: usize) -> f64 {
    (s - i as f64 / n as f64).max(0.0)
}

/// Local progress of slice `i` when `s` is split into `n` consecutive slices.
///
/// Slice `i` reads `0` until `s >= i/n` and `1` once `s >= (i+1)/n`.
pub fn divide_scale(s: f64, i: usize, n: usize) -> f64 {
    (1.0 / n as f64).min(max_scale(s, i, n)) * n as f64
}

/// Half-sine envelope: `0` at both ends, `1` at `s = 0.5`.
pub fn sinify(s: f64) -> f64 {
    (s * PI).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
