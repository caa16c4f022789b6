//! Inventory DTOs

use core_kernel::{DecimalEngine, NumericInput, WarehouseId};
use domain_inventory::{StockMatrixEntry, ValuationReport};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use super::AmountDto;

#[derive(Debug, Serialize)]
pub struct StockEntryDto {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    pub total: f64,
    pub by_warehouse: BTreeMap<String, f64>,
}

/// Stock matrix: per-item totals with per-warehouse breakdowns
#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub items: Vec<StockEntryDto>,
}

impl StockResponse {
    pub fn from_matrix(engine: &DecimalEngine, matrix: &[StockMatrixEntry]) -> Self {
        let quantity = |q: Decimal| engine.to_number(&NumericInput::from(q));
        Self {
            items: matrix
                .iter()
                .map(|entry| StockEntryDto {
                    item: entry.item.to_string(),
                    item_title: entry.item_title.clone(),
                    total: quantity(entry.total),
                    by_warehouse: entry
                        .by_warehouse
                        .iter()
                        .map(|(wh, q)| (wh.to_string(), quantity(*q)))
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemValuationDto {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    pub quantity: f64,
    pub value: AmountDto,
}

#[derive(Debug, Serialize)]
pub struct ValuationResponse {
    pub total_value: AmountDto,
    pub by_item: Vec<ItemValuationDto>,
    pub by_warehouse: BTreeMap<String, AmountDto>,
}

impl ValuationResponse {
    pub fn from_report(engine: &DecimalEngine, report: &ValuationReport) -> Self {
        Self {
            total_value: AmountDto::new(engine, report.total_value),
            by_item: report
                .by_item
                .iter()
                .map(|item| ItemValuationDto {
                    item: item.item.to_string(),
                    item_title: item.item_title.clone(),
                    quantity: engine.to_number(&NumericInput::from(item.quantity)),
                    value: AmountDto::new(engine, item.value),
                })
                .collect(),
            by_warehouse: report
                .by_warehouse
                .iter()
                .map(|(wh, value): (&WarehouseId, &Decimal)| {
                    (wh.to_string(), AmountDto::new(engine, *value))
                })
                .collect(),
        }
    }
}
