//! Custom Test Assertions
//!
//! Provides assertion helpers that give more meaningful failure messages
//! than standard assertions for decimal results.

use rust_decimal::Decimal;

/// Asserts that two decimals are equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a value has at most `dp` decimal places
pub fn assert_max_scale(value: Decimal, dp: u32) {
    assert!(
        value.normalize().scale() <= dp,
        "Expected at most {} decimal places, got {}",
        dp,
        value
    );
}
