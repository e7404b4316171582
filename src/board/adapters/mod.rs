//! Adapter implementations of the board's port contracts.

pub mod memory;
