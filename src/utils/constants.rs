// ============================================================================
// CONSTANTS - Storage keys, API paths, timings
// ============================================================================

/// Storage key holding the bearer token
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
/// Storage key holding the logged-in username (email)
pub const STORAGE_KEY_USERNAME: &str = "username";

/// Header carrying the username on authenticated calls
pub const USERNAME_HEADER: &str = "username";

/// Exact message the backend returns on a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// Companies with this value are left out of the dashboard filter
pub const COMPANY_PLACEHOLDER: &str = "N/A";

/// Admin countdown tick
pub const ADMIN_TICK_MS: u32 = 1_000;

/// Window events that count as admin activity
pub const ADMIN_ACTIVITY_EVENTS: [&str; 4] = ["mousedown", "keydown", "scroll", "touchstart"];

/// Accepted spreadsheet extensions for bulk scheduling
pub const BULK_FILE_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

pub const API_AUTH_LOGIN: &str = "/api/auth/login";
pub const API_AUTH_REGISTER: &str = "/api/auth/register";
pub const API_DASHBOARD: &str = "/api/dashboard";
pub const API_ADMIN_VALIDATE_PASSWORD: &str = "/api/admin/validate-password";
pub const API_ADMIN_VALIDATE_OTP: &str = "/api/admin/validate-otp";
pub const API_ADMIN_UNAPPROVED_USERS: &str = "/api/admin/unapproved-users";
pub const API_ADMIN_APPROVE: &str = "/api/admin/approve";
pub const API_ADMIN_DENY: &str = "/api/admin/deny";
pub const API_ADMIN_BULK_APPROVE: &str = "/api/admin/bulk-approve";
