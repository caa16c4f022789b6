//! Core Kernel - Foundational types for the Tanuki Admin financial core
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - The decimal engine: total, precision-preserving arithmetic over messy numeric input
//! - Reporting-period types (month and day keys in a configurable timezone)
//! - Common identifiers and value objects

pub mod decimal;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use decimal::{DecimalEngine, NumericInput, WireDecimal};
pub use temporal::{DayKey, MonthKey, TemporalError, Timezone};
pub use identifiers::{ItemId, MovementId, WarehouseId};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
