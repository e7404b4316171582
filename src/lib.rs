//! TaskFlow board core: client-side state reconciliation for a
//! collaborative task board.
//!
//! This crate keeps one project's in-memory task collection consistent
//! across optimistic local mutations (drag-and-drop moves, detail edits,
//! deletions), asynchronous confirmation or rejection from the remote
//! authority, and full-collection refreshes. Rendering, transport, and
//! authentication live outside the crate.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state and projections with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the remote sync authority
//! - **Adapters**: Concrete implementations of ports (in-memory server
//!   simulation)
//! - **Services**: Orchestration of optimistic mutation, confirmation,
//!   and rollback
//!
//! # Modules
//!
//! - [`board`]: Task store, board projection, and reconciliation session

pub mod board;
