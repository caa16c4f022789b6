//! Finance domain errors

use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur in the finance domain
///
/// The aggregation itself is total; the only fallible surface is reporting
/// window construction from request parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    /// Invalid reporting period
    #[error("Invalid reporting period: {0}")]
    Temporal(#[from] TemporalError),

    /// A month was requested without its year
    #[error("Month {0} given without a year")]
    MonthWithoutYear(u32),
}
