//! In-memory gateway adapter simulating the remote authority.

mod gateway;

pub use gateway::InMemorySyncGateway;
