//! Health metrics aggregation
//!
//! Reduces a movement window into the derived business metrics the
//! dashboard renders: totals, burn rate, runway, profit margin, a composite
//! health score, and a twelve-month balance projection. Computed fresh per
//! invocation from the movement set it is given; never cached or persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use core_kernel::{DecimalEngine, MonthKey, Timezone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::buckets::{monthly_buckets, PeriodTotals};
use crate::movement::Movement;

/// Number of months covered by the runway projection.
pub const PROJECTION_MONTHS: usize = 12;

/// Aggregate income, expense, and balance over the window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    /// income - expenses
    pub balance: Decimal,
}

/// Average monthly cash consumption
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRate {
    /// Average monthly expense over the observed months.
    pub gross: Decimal,
    /// Average monthly expense minus income. Positive means the business
    /// consumes cash.
    pub net: Decimal,
}

/// Months of solvency at the current net burn
///
/// Canonical representation: when the business is cash-flow-positive or
/// break-even (`net <= 0`), `profitable` is set and `months` is omitted,
/// never a negative or NaN figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub profitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Decimal>,
}

/// Direction of the most recent month-over-month net movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Flat,
    Declining,
}

impl Trend {
    /// Score contribution in [0, 1].
    fn component(&self) -> Decimal {
        match self {
            Trend::Improving => Decimal::ONE,
            Trend::Flat => dec!(0.5),
            Trend::Declining => Decimal::ZERO,
        }
    }
}

/// Weighting policy for the composite health score
///
/// The exact coefficients are business policy, supplied at construction
/// rather than hard-coded in the computation. Whatever the weights, the
/// resulting score is clamped to [0, 100] and is monotonically
/// non-decreasing in runway and in profit margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScorePolicy {
    /// Runway (in months) considered fully healthy.
    pub runway_target_months: Decimal,
    pub runway_weight: Decimal,
    pub margin_weight: Decimal,
    pub trend_weight: Decimal,
}

impl Default for HealthScorePolicy {
    fn default() -> Self {
        Self {
            runway_target_months: dec!(12),
            runway_weight: dec!(50),
            margin_weight: dec!(35),
            trend_weight: dec!(15),
        }
    }
}

impl HealthScorePolicy {
    /// Computes the composite score from its three components.
    ///
    /// `runway_months` of `None` means profitable (infinite runway) and
    /// scores as a full runway component. Margin is mapped from [-1, 1]
    /// onto [0, 1], clamping outside that range.
    pub fn score(
        &self,
        engine: &DecimalEngine,
        runway_months: Option<Decimal>,
        profit_margin: Decimal,
        trend: Trend,
    ) -> u8 {
        let runway_component = match runway_months {
            None => Decimal::ONE,
            Some(months) => engine
                .divide(&months.into(), &self.runway_target_months.into())
                .clamp(Decimal::ZERO, Decimal::ONE),
        };
        let margin_component = engine
            .divide(
                &engine.add(&profit_margin.into(), &Decimal::ONE.into()).into(),
                &dec!(2).into(),
            )
            .clamp(Decimal::ZERO, Decimal::ONE);

        let weight_sum = [self.runway_weight, self.margin_weight, self.trend_weight]
            .iter()
            .fold(Decimal::ZERO, |acc, w| {
                engine.add(&acc.into(), &(*w).into())
            });
        let weighted = [
            engine.multiply(&self.runway_weight.into(), &runway_component.into()),
            engine.multiply(&self.margin_weight.into(), &margin_component.into()),
            engine.multiply(&self.trend_weight.into(), &trend.component().into()),
        ]
        .iter()
        .fold(Decimal::ZERO, |acc, term| {
            engine.add(&acc.into(), &(*term).into())
        });

        let unit = engine.divide(&weighted.into(), &weight_sum.into());
        let score = engine
            .multiply(&unit.into(), &dec!(100).into())
            .round()
            .clamp(Decimal::ZERO, dec!(100));

        score.to_u8().unwrap_or(0)
    }
}

/// Projected balance for one future month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: MonthKey,
    pub projected_balance: Decimal,
}

/// Derived metrics for a movement window
///
/// Fully determined by its inputs; holds only plain decimals and period
/// keys, both JSON-serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub totals: Totals,
    /// Totals scoped to the month containing `as_of`.
    pub current_month: PeriodTotals,
    pub months_observed: usize,
    pub avg_monthly_income: Decimal,
    pub avg_monthly_expense: Decimal,
    pub burn_rate: BurnRate,
    /// balance / income; zero when there is no income.
    pub profit_margin: Decimal,
    pub runway: Runway,
    pub trend: Trend,
    /// Composite indicator in [0, 100].
    pub health_score: u8,
    pub runway_projection: Vec<ProjectionPoint>,
}

/// Computes [`HealthMetrics`] from movement windows
///
/// Stateless and side-effect-free: safe to share across request handlers
/// without locking.
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    engine: DecimalEngine,
    timezone: Timezone,
    policy: HealthScorePolicy,
}

impl MetricsCalculator {
    pub fn new(engine: DecimalEngine, timezone: Timezone, policy: HealthScorePolicy) -> Self {
        Self {
            engine,
            timezone,
            policy,
        }
    }

    /// Reduces a movement slice into health metrics.
    ///
    /// `as_of` anchors the current-month scope and the projection start;
    /// passing it explicitly keeps the computation a pure function.
    pub fn compute(&self, movements: &[Movement], as_of: DateTime<Utc>) -> HealthMetrics {
        let e = &self.engine;
        let buckets = monthly_buckets(e, movements, &self.timezone);
        let months_observed = buckets.len();

        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for totals in buckets.values() {
            income = e.add(&income.into(), &totals.income.into());
            expenses = e.add(&expenses.into(), &totals.expense.into());
        }
        let balance = e.subtract(&income.into(), &expenses.into());

        let current_key = MonthKey::of(as_of, &self.timezone);
        let current_month = buckets.get(&current_key).cloned().unwrap_or_default();

        let month_count = Decimal::from(months_observed as u32);
        let avg_monthly_income = e.divide(&income.into(), &month_count.into());
        let avg_monthly_expense = e.divide(&expenses.into(), &month_count.into());

        let burn_rate = BurnRate {
            gross: avg_monthly_expense,
            net: e.subtract(&avg_monthly_expense.into(), &avg_monthly_income.into()),
        };

        let runway = if burn_rate.net <= Decimal::ZERO {
            Runway {
                profitable: true,
                months: None,
            }
        } else {
            let months = e
                .divide(&balance.into(), &burn_rate.net.into())
                .max(Decimal::ZERO);
            Runway {
                profitable: false,
                months: Some(months),
            }
        };

        let profit_margin = e.divide(&balance.into(), &income.into());
        let trend = Self::trend(e, &buckets);
        let health_score = self.policy.score(e, runway.months, profit_margin, trend);

        let runway_projection = self.project(balance, burn_rate.net, current_key);

        tracing::debug!(
            movements = movements.len(),
            months = months_observed,
            health_score,
            "health metrics computed"
        );

        HealthMetrics {
            totals: Totals {
                income,
                expenses,
                balance,
            },
            current_month,
            months_observed,
            avg_monthly_income,
            avg_monthly_expense,
            burn_rate,
            profit_margin,
            runway,
            trend,
            health_score,
            runway_projection,
        }
    }

    /// Month-over-month direction of net cash flow, from the last two
    /// observed months. Fewer than two months reads as flat.
    fn trend(engine: &DecimalEngine, buckets: &BTreeMap<MonthKey, PeriodTotals>) -> Trend {
        let mut nets = buckets.values().rev().map(|totals| totals.net(engine));
        match (nets.next(), nets.next()) {
            (Some(last), Some(previous)) => {
                if last > previous {
                    Trend::Improving
                } else if last < previous {
                    Trend::Declining
                } else {
                    Trend::Flat
                }
            }
            _ => Trend::Flat,
        }
    }

    /// Linear balance extrapolation over the next [`PROJECTION_MONTHS`].
    fn project(
        &self,
        balance: Decimal,
        net_burn: Decimal,
        from: MonthKey,
    ) -> Vec<ProjectionPoint> {
        let e = &self.engine;
        let mut points = Vec::with_capacity(PROJECTION_MONTHS);
        let mut month = from;
        let mut projected = balance;
        for _ in 0..PROJECTION_MONTHS {
            month = month.next();
            projected = e.subtract(&projected.into(), &net_burn.into());
            points.push(ProjectionPoint {
                month,
                projected_balance: projected,
            });
        }
        points
    }
}
