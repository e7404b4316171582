//! Step definitions and world for board reconciliation scenarios.

mod given;
mod then;
mod when;
pub mod world;
