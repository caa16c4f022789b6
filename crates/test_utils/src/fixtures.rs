//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for movements and inventory records.
//! These fixtures are designed to be consistent and predictable for unit
//! tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ItemId, MovementId, NumericInput, WarehouseId};
use domain_finance::{Direction, Movement};
use domain_inventory::InventoryRecord;
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Mid-January reference instant
    pub fn january() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    /// Mid-February reference instant
    pub fn february() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap()
    }

    /// Aggregation anchor after the February movements
    pub fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic item ID for testing
    pub fn item_id() -> ItemId {
        ItemId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic warehouse ID for testing
    pub fn warehouse_id() -> WarehouseId {
        WarehouseId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// A second deterministic warehouse ID
    pub fn second_warehouse_id() -> WarehouseId {
        WarehouseId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for movement test data
pub struct MovementFixtures;

impl MovementFixtures {
    /// A bare movement with the given direction, amount, and timestamp
    pub fn movement(
        direction: Direction,
        amount: impl Into<NumericInput>,
        occurred_at: DateTime<Utc>,
    ) -> Movement {
        Movement {
            id: MovementId::new(),
            direction,
            amount: amount.into(),
            currency: "EUR".to_string(),
            exchange_rate: None,
            base_amount: None,
            occurred_at,
            category: None,
            cost_center: None,
            description: None,
            counterparty: None,
        }
    }

    /// An income movement
    pub fn income(amount: impl Into<NumericInput>, occurred_at: DateTime<Utc>) -> Movement {
        Self::movement(Direction::Income, amount, occurred_at)
    }

    /// An expense movement
    pub fn expense(amount: impl Into<NumericInput>, occurred_at: DateTime<Utc>) -> Movement {
        Self::movement(Direction::Expense, amount, occurred_at)
    }

    /// The reference scenario: income 100 and expenses 40 spread over
    /// January and February 2024.
    pub fn two_month_set() -> Vec<Movement> {
        vec![
            Self::income("50", TemporalFixtures::january()),
            Self::expense("30", TemporalFixtures::january()),
            Self::income("50", TemporalFixtures::february()),
            Self::expense("10", TemporalFixtures::february()),
        ]
    }

    /// A movement document in the raw document-store export shape, amount
    /// in the high-precision wire format.
    pub fn wire_document() -> serde_json::Value {
        serde_json::json!({
            "direction": "income",
            "amount": { "$numberDecimal": "1250.40" },
            "currency": "EUR",
            "occurred_at": "2024-01-15T12:00:00Z",
            "category": "books"
        })
    }

    /// A movement document with a comma decimal separator and thousand
    /// separators, as legacy exports contain.
    pub fn comma_document() -> serde_json::Value {
        serde_json::json!({
            "direction": "expense",
            "amount": "1 250,40",
            "occurred_at": "2024-01-15T12:00:00Z"
        })
    }
}

/// Fixture for inventory test data
pub struct InventoryFixtures;

impl InventoryFixtures {
    /// An inventory record with the given stock and price
    pub fn record(
        item: ItemId,
        warehouse: WarehouseId,
        quantity: impl Into<NumericInput>,
        unit_price: impl Into<NumericInput>,
    ) -> InventoryRecord {
        InventoryRecord {
            item,
            item_title: None,
            warehouse,
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }

    /// One item split across the two deterministic warehouses
    pub fn single_item_two_warehouses() -> (ItemId, Vec<WarehouseId>, Vec<InventoryRecord>) {
        let item = IdFixtures::item_id();
        let warehouses = vec![IdFixtures::warehouse_id(), IdFixtures::second_warehouse_id()];
        let records = vec![
            Self::record(item, warehouses[0], "5", "19.95"),
            Self::record(item, warehouses[1], "2", "19.95"),
        ];
        (item, warehouses, records)
    }
}
