// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: builds requests, attaches credentials, classifies
// responses. The session is passed in by the caller.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::{classify_failure, ApiError, ValidationError};
use crate::models::{
    validate_bulk_file_name, DashboardSummary, EmailRecord, ScheduleKind, ScheduleRequest,
    ScheduledTimePayload,
};
use crate::policy::{self, EmailAction, HttpMethod};
use crate::stores::Session;
use crate::utils::{parse_local_datetime, API_DASHBOARD, USERNAME_HEADER};

/// Message shown when a successful action returns an empty body
const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token + username header. No active session counts as a 401.
    pub(crate) fn authorize(
        &self,
        builder: RequestBuilder,
        session: &Session,
    ) -> Result<RequestBuilder, ApiError> {
        match (session.token(), session.username()) {
            (Some(token), Some(username)) => Ok(builder
                .header("Authorization", &format!("Bearer {}", token))
                .header(USERNAME_HEADER, username)),
            _ => Err(ApiError::Unauthorized(401)),
        }
    }

    pub(crate) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Body of a 2xx response; 401/403 are returned without reading the body
    pub(crate) async fn success_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        if let Some(rejected) = status_gate(status) {
            return Err(rejected);
        }

        let body = response.text().await.unwrap_or_default();
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(classify_failure(status, &body))
        }
    }

    pub(crate) async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = Self::success_body(response).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `GET /api/dashboard`
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardSummary, ApiError> {
        let url = self.url(API_DASHBOARD);
        log::info!("📊 Fetching dashboard");

        let builder = self.authorize(Request::get(&url), session)?;
        let response = Self::send(builder.build()).await?;
        let summary: DashboardSummary = Self::json(response).await?;

        log::info!(
            "✅ Dashboard loaded: {} emails ({} sent, {} failed, {} scheduled)",
            summary.combined_emails.len(),
            summary.total_sent,
            summary.total_failed,
            summary.total_scheduled
        );
        Ok(summary)
    }

    /// Single invitation or follow-up
    pub async fn schedule_email(
        &self,
        session: &Session,
        kind: ScheduleKind,
        request: ScheduleRequest,
    ) -> Result<String, ApiError> {
        request.validate(kind)?;
        let request = request.for_kind(kind);
        let url = self.url(kind.path());
        log::info!("📧 Scheduling {} for {}", kind.label(), request.recipient);

        let builder = self.authorize(Request::post(&url), session)?;
        let response = Self::send(builder.json(&request)).await?;
        let body = Self::success_body(response).await?;
        Ok(success_message(&body))
    }

    /// Spreadsheet upload, parsed by the backend
    pub async fn schedule_bulk(
        &self,
        session: &Session,
        kind: ScheduleKind,
        file: Option<&File>,
    ) -> Result<String, ApiError> {
        validate_bulk_file_name(file.map(|f| f.name()).as_deref())?;
        let file = file.ok_or(ValidationError::MissingFile)?;

        let form = FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_string()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("Could not attach file".to_string()))?;

        let url = self.url(&kind.bulk_path());
        log::info!("📤 Uploading {} for bulk {}", file.name(), kind.label());

        let builder = self.authorize(Request::post(&url), session)?;
        let response = Self::send(builder.body(form)).await?;
        Self::success_body(response).await?;
        Ok("Bulk emails scheduled successfully!".to_string())
    }

    /// Delete / reschedule / follow-up on a dashboard row.
    /// The policy is checked before anything touches the network.
    pub async fn email_action(
        &self,
        session: &Session,
        email: &EmailRecord,
        action: EmailAction,
        scheduled_time: Option<&str>,
    ) -> Result<String, ApiError> {
        let endpoint = policy::resolve(email.email_type, email.status, action, email.id)?;
        let payload = action_payload(action, scheduled_time)?;
        let url = self.url(&endpoint.path);
        log::info!("✉️ {} -> {}", action, endpoint);

        let builder = match endpoint.method {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        let builder = self.authorize(builder, session)?;
        let request = match payload {
            Some(payload) => builder.json(&payload),
            None => builder.build(),
        };

        let response = Self::send(request).await?;
        let body = Self::success_body(response).await?;
        Ok(success_message(&body))
    }
}

/// `scheduledTime` body for reschedule/follow-up; delete sends nothing
pub fn action_payload(
    action: EmailAction,
    scheduled_time: Option<&str>,
) -> Result<Option<ScheduledTimePayload>, ValidationError> {
    if !action.needs_scheduled_time() {
        return Ok(None);
    }
    let value = scheduled_time
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField("scheduled time"))?;
    if parse_local_datetime(value).is_none() {
        return Err(ValidationError::InvalidDateTime(value.to_string()));
    }
    Ok(Some(ScheduledTimePayload {
        scheduled_time: value.to_string(),
    }))
}

/// JSON `message`, else the raw text, else a generic confirmation
pub fn success_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return DEFAULT_SUCCESS_MESSAGE.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Statuses that end the request before the body is read
pub(crate) fn status_gate(status: u16) -> Option<ApiError> {
    matches!(status, 401 | 403).then_some(ApiError::Unauthorized(status))
}
