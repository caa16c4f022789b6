//! Inventory domain ports

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError, WarehouseId};

use crate::record::InventoryRecord;

/// Supplies materialized inventory records and the known warehouse set.
#[async_trait]
pub trait InventorySource: DomainPort {
    /// Every inventory record on file, already deserialized.
    async fn records(&self) -> Result<Vec<InventoryRecord>, PortError>;

    /// The known warehouses and points of sale. Items show an explicit
    /// zero for each of these even when no record mentions it.
    async fn warehouses(&self) -> Result<Vec<WarehouseId>, PortError>;
}
