// ============================================================================
// ADMIN SERVICE - two-factor gate and user approval
// ============================================================================
// Credentials travel as query parameters; no bearer token is involved, so a
// 401/403 here means a wrong code, not an expired user session.
// ============================================================================

use gloo_net::http::Request;

use crate::error::ApiError;
use crate::models::PendingUser;
use crate::services::ApiClient;
use crate::utils::{
    API_ADMIN_APPROVE, API_ADMIN_BULK_APPROVE, API_ADMIN_DENY, API_ADMIN_UNAPPROVED_USERS,
    API_ADMIN_VALIDATE_OTP, API_ADMIN_VALIDATE_PASSWORD,
};

/// Only HTTP 200 advances the admin flow
async fn expect_ok(request: Result<Request, gloo_net::Error>) -> Result<(), ApiError> {
    let response = ApiClient::send(request).await?;
    let status = response.status();
    if status == 200 {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(crate::error::classify_failure(status, &body))
}

pub async fn validate_password(client: &ApiClient, password: &str) -> Result<(), ApiError> {
    log::info!("🔑 [ADMIN] Validating password");
    let url = client.url(API_ADMIN_VALIDATE_PASSWORD);
    expect_ok(Request::post(&url).query([("password", password)]).build()).await
}

pub async fn validate_otp(client: &ApiClient, otp: &str) -> Result<(), ApiError> {
    log::info!("🔢 [ADMIN] Validating OTP");
    let url = client.url(API_ADMIN_VALIDATE_OTP);
    expect_ok(Request::post(&url).query([("otp", otp)]).build()).await
}

pub async fn fetch_unapproved_users(client: &ApiClient, password: &str) -> Result<Vec<PendingUser>, ApiError> {
    let url = client.url(API_ADMIN_UNAPPROVED_USERS);
    let response = ApiClient::send(Request::get(&url).query([("password", password)]).build()).await?;
    let users: Vec<PendingUser> = ApiClient::json(response).await?;
    log::info!("👥 [ADMIN] {} users waiting for approval", users.len());
    Ok(users)
}

pub async fn approve_user(client: &ApiClient, user_id: i64, password: &str) -> Result<(), ApiError> {
    log::info!("✅ [ADMIN] Approving user {}", user_id);
    let url = client.url(API_ADMIN_APPROVE);
    let user_id = user_id.to_string();
    expect_ok(
        Request::post(&url)
            .query([("userId", user_id.as_str()), ("password", password)])
            .build(),
    )
    .await
}

pub async fn deny_user(client: &ApiClient, user_id: i64, password: &str) -> Result<(), ApiError> {
    log::info!("⛔ [ADMIN] Denying user {}", user_id);
    let url = client.url(API_ADMIN_DENY);
    let user_id = user_id.to_string();
    expect_ok(
        Request::post(&url)
            .query([("userId", user_id.as_str()), ("password", password)])
            .build(),
    )
    .await
}

pub async fn bulk_approve(client: &ApiClient, password: &str) -> Result<(), ApiError> {
    log::info!("✅ [ADMIN] Approving all pending users");
    let url = client.url(API_ADMIN_BULK_APPROVE);
    expect_ok(Request::post(&url).query([("password", password)]).build()).await
}
