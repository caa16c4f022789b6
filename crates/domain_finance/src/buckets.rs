//! Period bucketing
//!
//! Movements fold into per-month or per-day buckets of accumulated income
//! and expense. All accumulation goes through the decimal engine; the plain
//! `+` operator never touches money here.

use std::collections::BTreeMap;

use core_kernel::{DayKey, DecimalEngine, MonthKey, Timezone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::movement::{Direction, Movement};

/// Accumulated income and expense for one period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl PeriodTotals {
    /// Income minus expense for the period.
    pub fn net(&self, engine: &DecimalEngine) -> Decimal {
        engine.subtract(&self.income.into(), &self.expense.into())
    }

    fn absorb(&mut self, engine: &DecimalEngine, movement: &Movement) {
        let amount = movement.reporting_amount(engine);
        match movement.direction {
            Direction::Income => {
                self.income = engine.add(&self.income.into(), &amount.into());
            }
            Direction::Expense => {
                self.expense = engine.add(&self.expense.into(), &amount.into());
            }
        }
    }
}

/// Folds movements into monthly buckets, keyed by the month observed in the
/// reporting timezone. The map iterates oldest month first.
pub fn monthly_buckets(
    engine: &DecimalEngine,
    movements: &[Movement],
    tz: &Timezone,
) -> BTreeMap<MonthKey, PeriodTotals> {
    let mut buckets: BTreeMap<MonthKey, PeriodTotals> = BTreeMap::new();
    for movement in movements {
        buckets
            .entry(MonthKey::of(movement.occurred_at, tz))
            .or_default()
            .absorb(engine, movement);
    }
    buckets
}

/// Folds movements into daily buckets.
pub fn daily_buckets(
    engine: &DecimalEngine,
    movements: &[Movement],
    tz: &Timezone,
) -> BTreeMap<DayKey, PeriodTotals> {
    let mut buckets: BTreeMap<DayKey, PeriodTotals> = BTreeMap::new();
    for movement in movements {
        buckets
            .entry(DayKey::of(movement.occurred_at, tz))
            .or_default()
            .absorb(engine, movement);
    }
    buckets
}
