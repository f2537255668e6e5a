pub mod admin_page;
pub mod app;
pub mod dashboard;
pub mod email_action_modal;
pub mod login_form;
pub mod navbar;
pub mod registration_form;
pub mod schedule_form;
pub mod trend_chart;

pub use admin_page::AdminPage;
pub use app::App;
pub use dashboard::Dashboard;
pub use email_action_modal::EmailActionModal;
pub use login_form::LoginForm;
pub use navbar::{Navbar, NotFound};
pub use registration_form::RegistrationForm;
pub use schedule_form::ScheduleForm;
pub use trend_chart::TrendChart;
