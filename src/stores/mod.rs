pub mod admin_store;
pub mod in_flight;
pub mod session_store;

pub use admin_store::{AdminAction, AdminSession, AdminStage, AdminState, TickOutcome};
pub use in_flight::InFlight;
pub use session_store::{Session, SessionStore};
