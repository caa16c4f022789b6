//! Inventory record model

use core_kernel::{ItemId, NumericInput, WarehouseId};
use serde::{Deserialize, Serialize};

/// Stock of one catalog item at one warehouse or point of sale
///
/// Like movements, records deserialize tolerantly: quantities and prices
/// ride through [`NumericInput`] so a malformed field degrades to zero at
/// normalization time instead of rejecting the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub item: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
    #[serde(default)]
    pub warehouse: WarehouseId,
    #[serde(default)]
    pub quantity: NumericInput,
    #[serde(default)]
    pub unit_price: NumericInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerates_sparse_document() {
        let record: InventoryRecord = serde_json::from_value(serde_json::json!({
            "item_title": "Field Guide to Tanuki"
        }))
        .unwrap();

        assert_eq!(record.quantity, NumericInput::Missing);
        assert_eq!(record.unit_price, NumericInput::Missing);
    }

    #[test]
    fn test_wire_format_price() {
        let record: InventoryRecord = serde_json::from_value(serde_json::json!({
            "quantity": 3,
            "unit_price": { "$numberDecimal": "24.95" }
        }))
        .unwrap();

        assert_eq!(record.unit_price, NumericInput::wire("24.95"));
    }
}
