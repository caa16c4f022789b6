//! Stock matrix
//!
//! Per catalog item: total stock plus the per-warehouse breakdown.
//!
//! # Invariants
//!
//! - `total` equals the engine-add reduction of the per-warehouse values
//! - every known warehouse appears as an explicit key, contributing zero
//!   when it holds no stock for the item

use std::collections::BTreeMap;

use core_kernel::{DecimalEngine, ItemId, WarehouseId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// Stock of one item across all warehouses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMatrixEntry {
    pub item: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    /// Sum of the per-warehouse quantities.
    pub total: Decimal,
    pub by_warehouse: BTreeMap<WarehouseId, Decimal>,
}

/// Builds the stock matrix for a record set.
///
/// `warehouses` is the known warehouse set; each gets an explicit zero key
/// on every item. Records referencing a warehouse outside the set are still
/// counted and gain a key.
pub fn stock_matrix(
    engine: &DecimalEngine,
    records: &[InventoryRecord],
    warehouses: &[WarehouseId],
) -> Vec<StockMatrixEntry> {
    let mut items: BTreeMap<ItemId, StockMatrixEntry> = BTreeMap::new();

    for record in records {
        let entry = items.entry(record.item).or_insert_with(|| {
            let by_warehouse = warehouses
                .iter()
                .map(|wh| (*wh, Decimal::ZERO))
                .collect();
            StockMatrixEntry {
                item: record.item,
                item_title: None,
                total: Decimal::ZERO,
                by_warehouse,
            }
        });
        if entry.item_title.is_none() {
            entry.item_title = record.item_title.clone();
        }

        let quantity = engine.normalize(&record.quantity);
        let slot = entry
            .by_warehouse
            .entry(record.warehouse)
            .or_insert(Decimal::ZERO);
        *slot = engine.add(&(*slot).into(), &quantity.into());
        entry.total = engine.add(&entry.total.into(), &quantity.into());
    }

    items.into_values().collect()
}
