//! Finance DTOs

use core_kernel::{DayKey, DecimalEngine, MonthKey, NumericInput};
use domain_finance::{HealthMetrics, PeriodTotals, RollupEntry, Trend};
use serde::Serialize;
use std::collections::BTreeMap;

use super::AmountDto;

#[derive(Debug, Serialize)]
pub struct TotalsDto {
    pub income: AmountDto,
    pub expenses: AmountDto,
    pub balance: AmountDto,
}

#[derive(Debug, Serialize)]
pub struct PeriodTotalsDto {
    pub income: AmountDto,
    pub expense: AmountDto,
}

impl PeriodTotalsDto {
    fn new(engine: &DecimalEngine, totals: &PeriodTotals) -> Self {
        Self {
            income: AmountDto::new(engine, totals.income),
            expense: AmountDto::new(engine, totals.expense),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BurnRateDto {
    pub gross: AmountDto,
    pub net: AmountDto,
}

#[derive(Debug, Serialize)]
pub struct RunwayDto {
    pub profitable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ProjectionPointDto {
    pub month: String,
    pub projected_balance: AmountDto,
}

/// Health metrics as rendered to the dashboard
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub currency: String,
    pub totals: TotalsDto,
    pub current_month: PeriodTotalsDto,
    pub months_observed: usize,
    pub avg_monthly_income: AmountDto,
    pub avg_monthly_expense: AmountDto,
    pub burn_rate: BurnRateDto,
    pub profit_margin: f64,
    pub runway: RunwayDto,
    pub trend: Trend,
    pub health_score: u8,
    pub runway_projection: Vec<ProjectionPointDto>,
}

impl SummaryResponse {
    pub fn from_metrics(
        engine: &DecimalEngine,
        currency: impl Into<String>,
        metrics: &HealthMetrics,
    ) -> Self {
        Self {
            currency: currency.into(),
            totals: TotalsDto {
                income: AmountDto::new(engine, metrics.totals.income),
                expenses: AmountDto::new(engine, metrics.totals.expenses),
                balance: AmountDto::new(engine, metrics.totals.balance),
            },
            current_month: PeriodTotalsDto::new(engine, &metrics.current_month),
            months_observed: metrics.months_observed,
            avg_monthly_income: AmountDto::new(engine, metrics.avg_monthly_income),
            avg_monthly_expense: AmountDto::new(engine, metrics.avg_monthly_expense),
            burn_rate: BurnRateDto {
                gross: AmountDto::new(engine, metrics.burn_rate.gross),
                net: AmountDto::new(engine, metrics.burn_rate.net),
            },
            profit_margin: engine.to_number(&NumericInput::from(metrics.profit_margin)),
            runway: RunwayDto {
                profitable: metrics.runway.profitable,
                months: metrics
                    .runway
                    .months
                    .map(|m| engine.to_number(&NumericInput::from(m))),
            },
            trend: metrics.trend,
            health_score: metrics.health_score,
            runway_projection: metrics
                .runway_projection
                .iter()
                .map(|point| ProjectionPointDto {
                    month: point.month.to_string(),
                    projected_balance: AmountDto::new(engine, point.projected_balance),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeriesPointDto {
    pub period: String,
    pub income: AmountDto,
    pub expense: AmountDto,
}

/// A bucketed income/expense series, oldest period first
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub points: Vec<SeriesPointDto>,
}

impl SeriesResponse {
    pub fn from_monthly(
        engine: &DecimalEngine,
        buckets: &BTreeMap<MonthKey, PeriodTotals>,
    ) -> Self {
        Self {
            points: buckets
                .iter()
                .map(|(key, totals)| SeriesPointDto {
                    period: key.to_string(),
                    income: AmountDto::new(engine, totals.income),
                    expense: AmountDto::new(engine, totals.expense),
                })
                .collect(),
        }
    }

    pub fn from_daily(engine: &DecimalEngine, buckets: &BTreeMap<DayKey, PeriodTotals>) -> Self {
        Self {
            points: buckets
                .iter()
                .map(|(key, totals)| SeriesPointDto {
                    period: key.to_string(),
                    income: AmountDto::new(engine, totals.income),
                    expense: AmountDto::new(engine, totals.expense),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RollupEntryDto {
    pub key: String,
    pub total: AmountDto,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RollupResponse {
    pub entries: Vec<RollupEntryDto>,
}

impl RollupResponse {
    pub fn from_entries(engine: &DecimalEngine, entries: &[RollupEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|entry| RollupEntryDto {
                    key: entry.key.clone(),
                    total: AmountDto::new(engine, entry.total),
                    count: entry.count,
                })
                .collect(),
        }
    }
}
