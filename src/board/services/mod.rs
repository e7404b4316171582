//! Application services for board orchestration.

mod session;

pub use session::BoardSession;
