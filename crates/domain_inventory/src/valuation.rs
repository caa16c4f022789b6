//! Inventory valuation
//!
//! Each record contributes quantity times unit price; contributions sum
//! per item, per warehouse, and into a grand total.

use std::collections::BTreeMap;

use core_kernel::{DecimalEngine, ItemId, WarehouseId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// Valuation of one catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemValuation {
    pub item: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    pub quantity: Decimal,
    pub value: Decimal,
}

/// Valuation rollup for a record set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationReport {
    pub total_value: Decimal,
    /// Ordered by descending value.
    pub by_item: Vec<ItemValuation>,
    pub by_warehouse: BTreeMap<WarehouseId, Decimal>,
}

/// Values a record set.
pub fn valuation(engine: &DecimalEngine, records: &[InventoryRecord]) -> ValuationReport {
    let mut by_item: BTreeMap<ItemId, ItemValuation> = BTreeMap::new();
    let mut by_warehouse: BTreeMap<WarehouseId, Decimal> = BTreeMap::new();
    let mut total_value = Decimal::ZERO;

    for record in records {
        let quantity = engine.normalize(&record.quantity);
        let value = engine.multiply(&record.quantity, &record.unit_price);

        let item = by_item.entry(record.item).or_insert_with(|| ItemValuation {
            item: record.item,
            item_title: None,
            quantity: Decimal::ZERO,
            value: Decimal::ZERO,
        });
        if item.item_title.is_none() {
            item.item_title = record.item_title.clone();
        }
        item.quantity = engine.add(&item.quantity.into(), &quantity.into());
        item.value = engine.add(&item.value.into(), &value.into());

        let warehouse_value = by_warehouse
            .entry(record.warehouse)
            .or_insert(Decimal::ZERO);
        *warehouse_value = engine.add(&(*warehouse_value).into(), &value.into());

        total_value = engine.add(&total_value.into(), &value.into());
    }

    let mut by_item: Vec<ItemValuation> = by_item.into_values().collect();
    by_item.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.item.cmp(&b.item)));

    ValuationReport {
        total_value,
        by_item,
        by_warehouse,
    }
}
