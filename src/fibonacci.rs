//! Fibonacci numbers
//!
//! F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).

use std::fmt;

/// Largest `n` whose Fibonacci number fits in a `u128`
pub const MAX_N: i64 = 186;

/// Error type for invalid Fibonacci arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibonacciError {
    /// `n` was below zero
    Negative(i64),
    /// F(n) does not fit in a `u128`
    Overflow(i64),
}

impl fmt::Display for FibonacciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(n) => write!(f, "n must be non-negative, got {n}"),
            Self::Overflow(n) => {
                write!(f, "F({n}) overflows a 128-bit integer (max n is {MAX_N})")
            }
        }
    }
}

impl std::error::Error for FibonacciError {}

/// Compute the nth Fibonacci number
///
/// Runs in linear time; returns the same values as [`fibonacci_recursive`].
///
/// # Errors
/// - [`FibonacciError::Negative`] if `n < 0`
/// - [`FibonacciError::Overflow`] if `n > MAX_N`
///
/// # Examples
/// ```
/// use wordle_game::fibonacci::{fibonacci, FibonacciError};
///
/// assert_eq!(fibonacci(10), Ok(55));
/// assert_eq!(fibonacci(-1), Err(FibonacciError::Negative(-1)));
/// ```
pub fn fibonacci(n: i64) -> Result<u128, FibonacciError> {
    if n < 0 {
        return Err(FibonacciError::Negative(n));
    }
    if n > MAX_N {
        return Err(FibonacciError::Overflow(n));
    }
    if n == 0 {
        return Ok(0);
    }

    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 1..n {
        (previous, current) = (current, previous + current);
    }
    Ok(current)
}

/// Direct recursive definition
///
/// Exponential time; only sensible for small `n`.
#[must_use]
pub fn fibonacci_recursive(n: u32) -> u128 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
        assert_eq!(fibonacci(2), Ok(1));
    }

    #[test]
    fn known_values() {
        assert_eq!(fibonacci(10), Ok(55));
        assert_eq!(fibonacci(20), Ok(6765));
        assert_eq!(fibonacci(50), Ok(12_586_269_025));
        assert_eq!(fibonacci(93), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn recurrence_holds() {
        for n in 2..=MAX_N {
            let a = fibonacci(n - 1).unwrap();
            let b = fibonacci(n - 2).unwrap();
            assert_eq!(fibonacci(n), Ok(a + b), "F({n})");
        }
    }

    #[test]
    fn matches_recursive_definition() {
        for n in 0..=25u32 {
            assert_eq!(fibonacci(i64::from(n)), Ok(fibonacci_recursive(n)));
        }
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(fibonacci(-1), Err(FibonacciError::Negative(-1)));
        assert_eq!(fibonacci(i64::MIN), Err(FibonacciError::Negative(i64::MIN)));
    }

    #[test]
    fn overflow_boundary() {
        assert_eq!(
            fibonacci(MAX_N),
            Ok(332_825_110_087_067_562_321_196_029_789_634_457_848)
        );
        assert_eq!(fibonacci(MAX_N + 1), Err(FibonacciError::Overflow(MAX_N + 1)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FibonacciError::Negative(-3).to_string(),
            "n must be non-negative, got -3"
        );
        assert!(FibonacciError::Overflow(200).to_string().contains("F(200)"));
    }
}
