//! Finance Domain - Movement Aggregation and Health Metrics
//!
//! This crate reduces the company's financial movements (incomes and
//! expenses) into the derived metrics the dashboard renders: period buckets,
//! burn rate, runway, profit margin, a composite health score, and
//! category/cost-center rollups.
//!
//! # Design
//!
//! The aggregation is a pure function of its inputs: each invocation is
//! handed a materialized movement slice plus an `as_of` instant and computes
//! everything fresh. Nothing is cached, no state is shared between
//! invocations, and no step here performs I/O, so concurrent use needs no
//! locking.
//!
//! All monetary arithmetic goes through [`core_kernel::DecimalEngine`],
//! never native floating point, and nothing in this crate raises for
//! malformed or partial input. Missing numeric fields are zero, missing
//! grouping keys land in a distinguished bucket, and zero denominators
//! follow the engine's divide policy.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_finance::{MetricsCalculator, HealthScorePolicy};
//!
//! let calculator = MetricsCalculator::new(engine, timezone, HealthScorePolicy::default());
//! let metrics = calculator.compute(&movements, Utc::now());
//! println!("runway: {:?}, score: {}", metrics.runway, metrics.health_score);
//! ```

pub mod movement;
pub mod window;
pub mod buckets;
pub mod metrics;
pub mod rollup;
pub mod error;
pub mod ports;

pub use movement::{Direction, Movement};
pub use window::ReportingWindow;
pub use buckets::{daily_buckets, monthly_buckets, PeriodTotals};
pub use metrics::{
    BurnRate, HealthMetrics, HealthScorePolicy, MetricsCalculator, ProjectionPoint, Runway,
    Totals, Trend, PROJECTION_MONTHS,
};
pub use rollup::{category_rollup, cost_center_rollup, RollupEntry, UNCATEGORIZED};
pub use error::FinanceError;
pub use ports::MovementSource;
