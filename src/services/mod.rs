pub mod admin_service;
pub mod api_client;
pub mod auth_service;

pub use admin_service::*;
pub use api_client::{action_payload, success_message, ApiClient};
pub use auth_service::*;
