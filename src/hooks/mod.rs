pub mod session_context;
pub mod use_admin_session;
pub mod use_dashboard;

pub use session_context::{use_session_context, SessionContext, SessionProvider};
pub use use_admin_session::{use_admin_session, UseAdminSessionHandle};
pub use use_dashboard::{use_dashboard, UseDashboardHandle};
