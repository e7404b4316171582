//! Port contracts for board state reconciliation.
//!
//! Ports define transport-agnostic interfaces used by board services.

pub mod gateway;

pub use gateway::{FieldError, GatewayError, GatewayResult, SyncGateway};
