//! Finance domain ports

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};

use crate::movement::Movement;

/// Supplies materialized movement records to the aggregation layer.
///
/// Implementations live in the interface layer; the domain never performs
/// I/O itself. Window filtering happens after retrieval, in the caller.
#[async_trait]
pub trait MovementSource: DomainPort {
    /// Every movement on record, already deserialized.
    async fn movements(&self) -> Result<Vec<Movement>, PortError>;
}
