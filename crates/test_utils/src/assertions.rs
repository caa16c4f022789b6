//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain values that give
//! more meaningful error messages than standard assertions.

use core_kernel::{DecimalEngine, NumericInput};
use rust_decimal::Decimal;

/// Asserts that two decimals are equal, printing both on failure
///
/// # Panics
///
/// Panics if the values differ
pub fn assert_decimal_eq(actual: Decimal, expected: Decimal) {
    assert_eq!(
        actual, expected,
        "Decimal mismatch: actual={}, expected={}",
        actual, expected
    );
}

/// Asserts that two decimals are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `tolerance` - The allowed absolute difference
///
/// # Panics
///
/// Panics if the values differ by more than tolerance
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

/// Asserts that a presentation number is close to an expected value
///
/// Presentation numbers pass through `to_number` and may carry float
/// representation error; this checks within display tolerance.
pub fn assert_presentation_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "Presentation values differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a value formats to the expected display string
pub fn assert_displays_as(engine: &DecimalEngine, value: impl Into<NumericInput>, expected: &str) {
    let formatted = engine.to_fixed(&value.into(), 2);
    assert_eq!(
        formatted, expected,
        "Display mismatch: formatted={}, expected={}",
        formatted, expected
    );
}
