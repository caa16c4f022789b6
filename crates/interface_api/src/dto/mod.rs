//! Request/Response data transfer objects
//!
//! Responses carry only plain JSON numbers and fixed-point display strings.
//! Decimals are reduced at this boundary via the engine's `to_number` /
//! `to_fixed` and never leave as arbitrary-precision intermediates.

pub mod finance;
pub mod inventory;

use core_kernel::{DecimalEngine, NumericInput};
use rust_decimal::Decimal;
use serde::Serialize;

/// A monetary amount at the presentation boundary: a chart-friendly number
/// plus a two-place display string.
#[derive(Debug, Serialize)]
pub struct AmountDto {
    pub value: f64,
    pub display: String,
}

impl AmountDto {
    pub fn new(engine: &DecimalEngine, amount: Decimal) -> Self {
        let input = NumericInput::from(amount);
        Self {
            value: engine.to_number(&input),
            display: engine.to_fixed(&input, 2),
        }
    }
}
