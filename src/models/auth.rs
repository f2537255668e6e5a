use serde::{Deserialize, Serialize};

use crate::utils::LOGIN_SUCCESS_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Token of a successful login, or the message to show the user
    pub fn into_token(self) -> Result<String, String> {
        let success = self.message.as_deref() == Some(LOGIN_SUCCESS_MESSAGE);
        match self.token {
            Some(token) if success && !token.is_empty() => Ok(token),
            _ => Err(self
                .message
                .filter(|m| !m.is_empty() && m != LOGIN_SUCCESS_MESSAGE)
                .unwrap_or_else(|| "Login failed!".to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub designation: String,
    #[serde(rename = "phone_Number")]
    pub phone_number: Option<u64>,
}

/// Registration succeeded when the body is text containing "successfully",
/// or JSON carrying a `message`
pub fn registration_succeeded(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text.to_lowercase().contains("successfully"),
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| !m.is_empty())
            .unwrap_or(false),
        Err(_) => body.to_lowercase().contains("successfully"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_yields_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Login successful!","token":"T"}"#).unwrap();
        assert_eq!(response.into_token(), Ok("T".to_string()));
    }

    #[test]
    fn test_login_failure_messages() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"message":"Your account is awaiting approval"}"#).unwrap();
        assert_eq!(
            response.into_token(),
            Err("Your account is awaiting approval".to_string())
        );

        assert_eq!(LoginResponse::default().into_token(), Err("Login failed!".to_string()));

        let no_token = LoginResponse {
            message: Some(LOGIN_SUCCESS_MESSAGE.to_string()),
            token: None,
        };
        assert_eq!(no_token.into_token(), Err("Login failed!".to_string()));
    }

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            username: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            designation: "TPO".to_string(),
            phone_number: Some(9876543210),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phone_Number"], 9876543210u64);
        assert!(value.get("phone_number").is_none());
    }

    #[test]
    fn test_registration_success_detection() {
        assert!(registration_succeeded("User registered Successfully"));
        assert!(registration_succeeded(r#""registered successfully""#));
        assert!(registration_succeeded(r#"{"message":"Registration received"}"#));
        assert!(!registration_succeeded(r#"{"error":"duplicate"}"#));
        assert!(!registration_succeeded("Username already exists"));
    }
}
