use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::policy::{self, EmailAction};

/// Kind of email a dashboard row refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailType {
    Invitation,
    FollowUp,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmailType::Invitation => "Invitation",
            EmailType::FollowUp => "FollowUp",
            EmailType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Delivery status as reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailStatus {
    Sent,
    Failed,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EmailStatus {
    /// CSS class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            EmailStatus::Sent => "badge badge-sent",
            EmailStatus::Failed => "badge badge-failed",
            EmailStatus::Pending => "badge badge-pending",
            EmailStatus::Unknown => "badge badge-unknown",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmailStatus::Sent => "SENT",
            EmailStatus::Failed => "FAILED",
            EmailStatus::Pending => "PENDING",
            EmailStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// One row of the dashboard's combined email list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub status: EmailStatus,
    #[serde(rename = "type", default)]
    pub email_type: EmailType,
}

impl EmailRecord {
    pub fn allowed_actions(&self) -> Vec<EmailAction> {
        policy::allowed_actions(self.email_type, self.status)
    }

    /// Invitations and follow-ups have separate id spaces
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.email_type, self.id)
    }

    pub fn company_label(&self) -> &str {
        match self.company.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => crate::utils::COMPANY_PLACEHOLDER,
        }
    }
}

/// Body of reschedule / follow-up calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTimePayload {
    pub scheduled_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_dashboard_row() {
        let json = r#"{"id":1,"type":"Invitation","status":"FAILED","recipient":"a@b.com","company":"ACME"}"#;
        let record: EmailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.email_type, EmailType::Invitation);
        assert_eq!(record.status, EmailStatus::Failed);
        assert_eq!(record.company_label(), "ACME");
        assert!(record.scheduled_time.is_none());
    }

    #[test]
    fn test_unknown_type_and_status_do_not_fail() {
        let json = r#"{"id":7,"type":"Reminder","status":"BOUNCED","recipient":"x@y.z","company":null}"#;
        let record: EmailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.email_type, EmailType::Unknown);
        assert_eq!(record.status, EmailStatus::Unknown);
        assert_eq!(record.company_label(), "N/A");
        assert!(record.allowed_actions().is_empty());
    }

    #[test]
    fn test_null_recipient_does_not_fail_the_row() {
        let json = r#"{"id":3,"type":"FollowUp","status":"SENT","recipient":null,"company":"ACME","scheduledTime":null}"#;
        let record: EmailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.recipient, "");
        assert_eq!(record.status, EmailStatus::Sent);
    }

    #[test]
    fn test_row_keys_unique_across_types() {
        let json = r#"[
            {"id":1,"type":"Invitation","status":"SENT","recipient":"a@b.com"},
            {"id":1,"type":"FollowUp","status":"SENT","recipient":"a@b.com"}
        ]"#;
        let records: Vec<EmailRecord> = serde_json::from_str(json).unwrap();
        let keys: Vec<String> = records.iter().map(EmailRecord::row_key).collect();
        assert_eq!(keys, vec!["Invitation-1".to_string(), "FollowUp-1".to_string()]);
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let payload = ScheduledTimePayload {
            scheduled_time: "2025-02-01T10:00".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"scheduledTime":"2025-02-01T10:00"}"#
        );
    }
}
