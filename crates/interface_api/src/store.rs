//! Document store adapter
//!
//! The core consumes movements and inventory records already materialized;
//! this adapter materializes them from the document-database JSON exports
//! in the configured data directory and serves them through the domain
//! ports. Loading is tolerant document-by-document: a malformed entry is
//! skipped with a warning, never fatal.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, WarehouseId,
};
use domain_finance::{Movement, MovementSource};
use domain_inventory::{InventoryRecord, InventorySource};
use serde::de::DeserializeOwned;

/// In-memory snapshot of the document-store exports
#[derive(Debug, Default)]
pub struct JsonDocumentStore {
    movements: Vec<Movement>,
    records: Vec<InventoryRecord>,
    warehouses: Vec<WarehouseId>,
}

impl JsonDocumentStore {
    /// Loads the exports from `data_dir`.
    ///
    /// A missing file yields an empty collection with a warning; the
    /// dashboard renders from whatever is present. When no warehouse list
    /// is exported, the known set is derived from the records themselves.
    pub fn load(data_dir: &Path) -> Result<Self, PortError> {
        let movements = load_documents(&data_dir.join("movements.json"))?;
        let records: Vec<InventoryRecord> = load_documents(&data_dir.join("inventory.json"))?;
        let mut warehouses: Vec<WarehouseId> =
            load_documents(&data_dir.join("warehouses.json"))?;
        if warehouses.is_empty() {
            let seen: BTreeSet<WarehouseId> = records.iter().map(|r| r.warehouse).collect();
            warehouses = seen.into_iter().collect();
        }

        tracing::info!(
            movements = movements.len(),
            inventory_records = records.len(),
            warehouses = warehouses.len(),
            "document store loaded"
        );

        Ok(Self {
            movements,
            records,
            warehouses,
        })
    }

    /// Builds a store from already-materialized collections. Used by tests
    /// and anything embedding the API without a data directory.
    pub fn in_memory(
        movements: Vec<Movement>,
        records: Vec<InventoryRecord>,
        warehouses: Vec<WarehouseId>,
    ) -> Self {
        Self {
            movements,
            records,
            warehouses,
        }
    }
}

/// Reads a JSON array of documents, skipping entries that fail to
/// deserialize.
fn load_documents<T: DeserializeOwned>(path: &PathBuf) -> Result<Vec<T>, PortError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "export file missing, treating as empty");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path).map_err(|err| PortError::Connection {
        message: format!("cannot read {}", path.display()),
        source: Some(Box::new(err)),
    })?;
    let documents: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|err| PortError::Transformation {
            message: format!("{} is not a JSON array: {}", path.display(), err),
        })?;

    let total = documents.len();
    let parsed: Vec<T> = documents
        .into_iter()
        .filter_map(|doc| match serde_json::from_value(doc) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping malformed document");
                None
            }
        })
        .collect();

    if parsed.len() < total {
        tracing::warn!(
            path = %path.display(),
            skipped = total - parsed.len(),
            "some documents were skipped"
        );
    }
    Ok(parsed)
}

impl DomainPort for JsonDocumentStore {}

#[async_trait]
impl MovementSource for JsonDocumentStore {
    async fn movements(&self) -> Result<Vec<Movement>, PortError> {
        Ok(self.movements.clone())
    }
}

#[async_trait]
impl InventorySource for JsonDocumentStore {
    async fn records(&self) -> Result<Vec<InventoryRecord>, PortError> {
        Ok(self.records.clone())
    }

    async fn warehouses(&self) -> Result<Vec<WarehouseId>, PortError> {
        Ok(self.warehouses.clone())
    }
}

#[async_trait]
impl HealthCheckable for JsonDocumentStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "json_document_store".to_string(),
            status: AdapterHealth::Healthy,
            message: Some(format!(
                "{} movements, {} inventory records",
                self.movements.len(),
                self.records.len()
            )),
            checked_at: Utc::now(),
        }
    }
}
