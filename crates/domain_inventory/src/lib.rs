//! Inventory Domain - Stock Matrices and Valuation
//!
//! Reduces per-warehouse inventory records into the stock matrix the
//! catalog screens render (total stock per item plus its per-warehouse
//! breakdown) and into a valuation report (quantity times unit price,
//! rolled up by item and by warehouse).
//!
//! Structurally these are the same reductions as the finance aggregations:
//! pure folds over materialized records, all arithmetic through
//! [`core_kernel::DecimalEngine`], total on malformed input.

pub mod record;
pub mod stock;
pub mod valuation;
pub mod ports;

pub use record::InventoryRecord;
pub use stock::{stock_matrix, StockMatrixEntry};
pub use valuation::{valuation, ItemValuation, ValuationReport};
pub use ports::InventorySource;
