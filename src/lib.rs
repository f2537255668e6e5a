// ============================================================================
// EMAIL SCHEDULER ADMIN - Yew front end
// ============================================================================
// - stores: session + admin two-factor state (framework independent)
// - services: HTTP only
// - policy / router: pure decision tables
// - hooks + components: Yew glue and views
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod policy;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;

pub use components::App;
