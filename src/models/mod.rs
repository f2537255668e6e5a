use serde::{Deserialize, Deserializer};

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod email;
pub mod schedule;

pub use admin::{filter_pending_users, PendingUser};
pub use auth::{registration_succeeded, LoginRequest, LoginResponse, RegisterRequest};
pub use dashboard::{showing_label, DashboardSummary, EmailFilter, StatCard};
pub use email::{EmailRecord, EmailStatus, EmailType, ScheduledTimePayload};
pub use schedule::{validate_bulk_file_name, ScheduleKind, ScheduleRequest};

/// `null` and missing both fall back to `T::default()`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
