//! Board state reconciliation for one project's task board.
//!
//! The board module owns the in-memory task collection rendered as the
//! three-column board (To Do / In Progress / Done), keeps it consistent
//! under optimistic drag-and-drop moves, detail edits, and deletions, and
//! reconciles every optimistic change against the remote authority's
//! confirmation or rejection. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
