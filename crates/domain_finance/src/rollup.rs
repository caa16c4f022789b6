//! Category and cost-center rollups
//!
//! Groups movements by a reference key and sums reporting amounts per
//! group. A movement with no key lands in the distinguished
//! "uncategorized" bucket rather than being dropped.

use std::collections::BTreeMap;

use core_kernel::DecimalEngine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::movement::Movement;

/// Bucket for movements carrying no grouping key.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One group in a rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupEntry {
    pub key: String,
    pub total: Decimal,
    pub count: usize,
}

/// Groups movements by `key_fn`, summing reporting amounts per group.
///
/// Results are ordered by descending magnitude (key order breaks ties, so
/// output is deterministic) and capped to `top_n` when given; chart
/// consumers only render the largest slices.
pub fn rollup_by<F>(
    engine: &DecimalEngine,
    movements: &[Movement],
    top_n: Option<usize>,
    key_fn: F,
) -> Vec<RollupEntry>
where
    F: Fn(&Movement) -> Option<&str>,
{
    let mut groups: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    for movement in movements {
        let key = key_fn(movement)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(UNCATEGORIZED);
        let group = groups
            .entry(key.to_string())
            .or_insert((Decimal::ZERO, 0));
        group.0 = engine.add(&group.0.into(), &movement.reporting_amount(engine).into());
        group.1 += 1;
    }

    let mut entries: Vec<RollupEntry> = groups
        .into_iter()
        .map(|(key, (total, count))| RollupEntry { key, total, count })
        .collect();
    entries.sort_by(|a, b| {
        b.total
            .abs()
            .cmp(&a.total.abs())
            .then_with(|| a.key.cmp(&b.key))
    });
    if let Some(n) = top_n {
        entries.truncate(n);
    }
    entries
}

/// Rollup by category reference.
pub fn category_rollup(
    engine: &DecimalEngine,
    movements: &[Movement],
    top_n: Option<usize>,
) -> Vec<RollupEntry> {
    rollup_by(engine, movements, top_n, |m| m.category.as_deref())
}

/// Rollup by cost center.
pub fn cost_center_rollup(
    engine: &DecimalEngine,
    movements: &[Movement],
    top_n: Option<usize>,
) -> Vec<RollupEntry> {
    rollup_by(engine, movements, top_n, |m| m.cost_center.as_deref())
}
