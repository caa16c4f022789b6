//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{ItemId, MovementId, NumericInput, WarehouseId};
use domain_finance::{Direction, Movement};
use domain_inventory::InventoryRecord;
use fake::faker::company::en::{Buzzword, CompanyName};
use fake::Fake;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test movements
pub struct MovementBuilder {
    direction: Direction,
    amount: NumericInput,
    currency: String,
    exchange_rate: Option<NumericInput>,
    base_amount: Option<NumericInput>,
    occurred_at: DateTime<Utc>,
    category: Option<String>,
    cost_center: Option<String>,
}

impl MovementBuilder {
    /// Creates an income builder with default values
    pub fn income() -> Self {
        Self::new(Direction::Income)
    }

    /// Creates an expense builder with default values
    pub fn expense() -> Self {
        Self::new(Direction::Expense)
    }

    fn new(direction: Direction) -> Self {
        Self {
            direction,
            amount: NumericInput::from("100"),
            currency: "EUR".to_string(),
            exchange_rate: None,
            base_amount: None,
            occurred_at: TemporalFixtures::january(),
            category: None,
            cost_center: None,
        }
    }

    /// Sets the amount, in any source form
    pub fn with_amount(mut self, amount: impl Into<NumericInput>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Sets the currency and its exchange rate to the reporting currency
    pub fn with_currency(
        mut self,
        currency: impl Into<String>,
        rate: impl Into<NumericInput>,
    ) -> Self {
        self.currency = currency.into();
        self.exchange_rate = Some(rate.into());
        self
    }

    /// Sets a pre-computed reporting-currency amount
    pub fn with_base_amount(mut self, base_amount: impl Into<NumericInput>) -> Self {
        self.base_amount = Some(base_amount.into());
        self
    }

    /// Sets the timestamp
    pub fn with_occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the cost center
    pub fn with_cost_center(mut self, cost_center: impl Into<String>) -> Self {
        self.cost_center = Some(cost_center.into());
        self
    }

    /// Builds the movement, faking the descriptive fields
    pub fn build(self) -> Movement {
        Movement {
            id: MovementId::new(),
            direction: self.direction,
            amount: self.amount,
            currency: self.currency,
            exchange_rate: self.exchange_rate,
            base_amount: self.base_amount,
            occurred_at: self.occurred_at,
            category: self.category,
            cost_center: self.cost_center,
            description: Some(Buzzword().fake()),
            counterparty: Some(CompanyName().fake()),
        }
    }
}

/// Builder for constructing test inventory records
pub struct InventoryRecordBuilder {
    item: ItemId,
    item_title: Option<String>,
    warehouse: WarehouseId,
    quantity: NumericInput,
    unit_price: NumericInput,
}

impl Default for InventoryRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRecordBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            item: ItemId::new(),
            item_title: None,
            warehouse: WarehouseId::new(),
            quantity: NumericInput::from("1"),
            unit_price: NumericInput::from("10.00"),
        }
    }

    /// Sets the item
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = item;
        self
    }

    /// Sets the item title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.item_title = Some(title.into());
        self
    }

    /// Sets the warehouse
    pub fn with_warehouse(mut self, warehouse: WarehouseId) -> Self {
        self.warehouse = warehouse;
        self
    }

    /// Sets the quantity, in any source form
    pub fn with_quantity(mut self, quantity: impl Into<NumericInput>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Sets the unit price, in any source form
    pub fn with_unit_price(mut self, unit_price: impl Into<NumericInput>) -> Self {
        self.unit_price = unit_price.into();
        self
    }

    /// Builds the record
    pub fn build(self) -> InventoryRecord {
        InventoryRecord {
            item: self.item,
            item_title: self.item_title,
            warehouse: self.warehouse,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}
