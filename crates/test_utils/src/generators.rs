//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{TimeZone, Utc};
use core_kernel::NumericInput;
use domain_finance::{Direction, Movement};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::MovementFixtures;

/// Strategy for generating movement directions
pub fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Income), Just(Direction::Expense)]
}

/// Strategy for generating amounts in cents, as exact decimals
pub fn cents_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating positive amounts in cents
pub fn positive_cents_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating one numeral in a random source form
///
/// All produced forms normalize to the same canonical decimal, which is
/// exactly what normalization equality properties need.
pub fn numeric_input_strategy() -> impl Strategy<Value = (Decimal, NumericInput)> {
    (positive_cents_strategy(), 0u8..4u8).prop_map(|(amount, form)| {
        let input = match form {
            0 => NumericInput::Exact(amount),
            1 => NumericInput::Text(amount.to_string()),
            2 => NumericInput::Text(amount.to_string().replace('.', ",")),
            _ => NumericInput::wire(amount.to_string()),
        };
        (amount, input)
    })
}

/// Strategy for generating a movement inside 2024 with a random source
/// form for its amount
pub fn movement_strategy() -> impl Strategy<Value = Movement> {
    (
        direction_strategy(),
        numeric_input_strategy(),
        1u32..=12u32,
        1u32..=28u32,
    )
        .prop_map(|(direction, (_, amount), month, day)| {
            let occurred_at = Utc
                .with_ymd_and_hms(2024, month, day, 12, 0, 0)
                .unwrap();
            MovementFixtures::movement(direction, amount, occurred_at)
        })
}

/// Strategy for generating movement sets
pub fn movement_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<Movement>> {
    proptest::collection::vec(movement_strategy(), 0..max_len)
}
