use gloo_net::http::Request;

use crate::error::{classify_failure, ApiError, ValidationError};
use crate::models::{registration_succeeded, LoginRequest, LoginResponse, RegisterRequest};
use crate::services::ApiClient;
use crate::utils::{API_AUTH_LOGIN, API_AUTH_REGISTER};

/// Perform login. The body carries the outcome even on 4xx (e.g. wrong password).
pub async fn perform_login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    if request.username.trim().is_empty() {
        return Err(ValidationError::MissingField("email").into());
    }
    if request.password.is_empty() {
        return Err(ValidationError::MissingField("password").into());
    }

    let url = client.url(API_AUTH_LOGIN);
    log::info!("🔐 Logging in as {}", request.username);

    let response = ApiClient::send(Request::post(&url).json(request)).await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<LoginResponse>(&body) {
        Ok(login) => Ok(login),
        Err(_) if !(200..300).contains(&status) => Err(classify_failure(status, &body)),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

/// Register a new account; it stays pending until an admin approves it
pub async fn register_user(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    for (value, field) in [
        (&request.username, "email"),
        (&request.password, "password"),
        (&request.name, "name"),
        (&request.designation, "designation"),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field).into());
        }
    }
    if request.phone_number.is_none() {
        return Err(ValidationError::MissingField("phone number").into());
    }

    let url = client.url(API_AUTH_REGISTER);
    log::info!("📝 Registering {}", request.username);

    let response = ApiClient::send(Request::post(&url).json(request)).await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !(200..300).contains(&status) {
        return Err(classify_failure(status, &body));
    }
    if registration_succeeded(&body) {
        log::info!("✅ Registration accepted for {}", request.username);
        Ok(())
    } else {
        log::error!("❌ Unexpected registration response: {}", body);
        Err(ApiError::Server {
            status,
            detail: if body.trim().is_empty() {
                "Error registering user.".to_string()
            } else {
                body
            },
        })
    }
}
