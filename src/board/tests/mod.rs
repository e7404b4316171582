//! Unit tests for the board module.
//!
//! Tests are organized by component:
//! - `domain_tests`: enums, wire forms, patch merging, project membership
//! - `store_tests`: task store mutation and snapshot contracts
//! - `projection_tests`: per-column ordering and tie-breaking
//! - `pending_tests`: pending-operation registration and staleness
//! - `session_tests`: optimistic mutation, confirmation, and rollback


mod pending_tests;
