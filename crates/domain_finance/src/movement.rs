//! Financial movement model
//!
//! A movement is a single financial event as stored by the catalog
//! application: an income or an expense, with an amount that may arrive in
//! any of the numeric source forms the document store produces. Movements
//! are immutable once read into the aggregator.

use chrono::{DateTime, Utc};
use core_kernel::{DecimalEngine, MovementId, NumericInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a financial movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

/// A single financial event
///
/// Deserialization is tolerant by construction: numeric fields ride through
/// [`NumericInput`] (so a malformed amount degrades to zero at normalization
/// time instead of rejecting the document), and descriptive fields default
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default)]
    pub id: MovementId,
    pub direction: Direction,
    /// Amount in `currency`.
    #[serde(default)]
    pub amount: NumericInput,
    /// ISO 4217 currency code of `amount`.
    #[serde(default = "Movement::default_currency")]
    pub currency: String,
    /// Rate from `currency` to the reporting currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<NumericInput>,
    /// Amount already expressed in the reporting currency, when the source
    /// recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<NumericInput>,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
}

impl Movement {
    fn default_currency() -> String {
        "EUR".to_string()
    }

    /// Amount of this movement in the reporting currency.
    ///
    /// Uses the recorded base amount when the source stored one; otherwise
    /// converts via the exchange rate. A rate of zero would wipe the amount,
    /// so a missing, zero, or malformed rate is treated as 1.
    pub fn reporting_amount(&self, engine: &DecimalEngine) -> Decimal {
        if let Some(base) = &self.base_amount {
            return engine.normalize(base);
        }
        match &self.exchange_rate {
            Some(rate) if engine.gt_zero(rate) => engine.multiply(&self.amount, rate),
            _ => engine.normalize(&self.amount),
        }
    }
}
