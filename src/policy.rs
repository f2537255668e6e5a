// ============================================================================
// EMAIL ACTION POLICY - (type, status) -> allowed actions -> endpoint
// ============================================================================
// Evaluated before any network call. Anything not in RULES is rejected.
// ============================================================================

use std::fmt;

use crate::models::{EmailStatus, EmailType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailAction {
    Delete,
    Reschedule,
    FollowUp,
}

impl EmailAction {
    /// Reschedule and follow-up carry a `scheduledTime` payload
    pub fn needs_scheduled_time(&self) -> bool {
        matches!(self, EmailAction::Reschedule | EmailAction::FollowUp)
    }

    /// Button label for a row of the given type
    pub fn label(&self, email_type: EmailType) -> &'static str {
        match (self, email_type) {
            (EmailAction::Delete, _) => "Delete",
            (EmailAction::Reschedule, _) => "Reschedule",
            (EmailAction::FollowUp, EmailType::FollowUp) => "Send Another Follow-up",
            (EmailAction::FollowUp, _) => "Send Follow-up",
        }
    }
}

impl fmt::Display for EmailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmailAction::Delete => "delete",
            EmailAction::Reschedule => "reschedule",
            EmailAction::FollowUp => "followup",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Delete => f.write_str("DELETE"),
        }
    }
}

/// Resolved target of an email action, path relative to the backend origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid action or email combination: {action} for {email_type} with status {status}")]
    NotAllowed {
        action: EmailAction,
        email_type: EmailType,
        status: EmailStatus,
    },
}

struct Rule {
    email_type: EmailType,
    status: EmailStatus,
    action: EmailAction,
    method: HttpMethod,
    template: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        email_type: EmailType::Invitation,
        status: EmailStatus::Sent,
        action: EmailAction::FollowUp,
        method: HttpMethod::Post,
        template: "/api/invitation/sent/{id}/follow-up",
    },
    Rule {
        email_type: EmailType::Invitation,
        status: EmailStatus::Failed,
        action: EmailAction::Delete,
        method: HttpMethod::Delete,
        template: "/api/invitation/failed/{id}",
    },
    Rule {
        email_type: EmailType::Invitation,
        status: EmailStatus::Failed,
        action: EmailAction::Reschedule,
        method: HttpMethod::Post,
        template: "/api/invitation/failed/{id}/reschedule",
    },
    Rule {
        email_type: EmailType::Invitation,
        status: EmailStatus::Pending,
        action: EmailAction::Delete,
        method: HttpMethod::Delete,
        template: "/api/invitation/scheduled/{id}",
    },
    Rule {
        email_type: EmailType::FollowUp,
        status: EmailStatus::Sent,
        action: EmailAction::FollowUp,
        method: HttpMethod::Post,
        template: "/api/followup/sent/{id}/resend",
    },
    Rule {
        email_type: EmailType::FollowUp,
        status: EmailStatus::Failed,
        action: EmailAction::Delete,
        method: HttpMethod::Delete,
        template: "/api/followup/failed/{id}",
    },
    Rule {
        email_type: EmailType::FollowUp,
        status: EmailStatus::Failed,
        action: EmailAction::Reschedule,
        method: HttpMethod::Post,
        template: "/api/followup/failed/{id}/reschedule",
    },
    Rule {
        email_type: EmailType::FollowUp,
        status: EmailStatus::Pending,
        action: EmailAction::Delete,
        method: HttpMethod::Delete,
        template: "/api/followup/scheduled/{id}",
    },
];

/// Actions offered for a row, in button order (the order of `RULES`)
pub fn allowed_actions(email_type: EmailType, status: EmailStatus) -> Vec<EmailAction> {
    RULES
        .iter()
        .filter(|rule| rule.email_type == email_type && rule.status == status)
        .map(|rule| rule.action)
        .collect()
}

/// Endpoint for `action` on email `id`, or `NotAllowed`
pub fn resolve(
    email_type: EmailType,
    status: EmailStatus,
    action: EmailAction,
    id: i64,
) -> Result<Endpoint, PolicyError> {
    RULES
        .iter()
        .find(|rule| rule.email_type == email_type && rule.status == status && rule.action == action)
        .map(|rule| Endpoint {
            method: rule.method,
            path: rule.template.replace("{id}", &id.to_string()),
        })
        .ok_or(PolicyError::NotAllowed {
            action,
            email_type,
            status,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailRecord;

    const TYPES: [EmailType; 3] = [EmailType::Invitation, EmailType::FollowUp, EmailType::Unknown];
    const STATUSES: [EmailStatus; 4] = [
        EmailStatus::Sent,
        EmailStatus::Failed,
        EmailStatus::Pending,
        EmailStatus::Unknown,
    ];
    const ACTIONS: [EmailAction; 3] = [EmailAction::Delete, EmailAction::Reschedule, EmailAction::FollowUp];

    #[test]
    fn test_table_endpoints() {
        let cases = [
            (EmailType::Invitation, EmailStatus::Sent, EmailAction::FollowUp, "POST /api/invitation/sent/9/follow-up"),
            (EmailType::Invitation, EmailStatus::Failed, EmailAction::Delete, "DELETE /api/invitation/failed/9"),
            (EmailType::Invitation, EmailStatus::Failed, EmailAction::Reschedule, "POST /api/invitation/failed/9/reschedule"),
            (EmailType::Invitation, EmailStatus::Pending, EmailAction::Delete, "DELETE /api/invitation/scheduled/9"),
            (EmailType::FollowUp, EmailStatus::Sent, EmailAction::FollowUp, "POST /api/followup/sent/9/resend"),
            (EmailType::FollowUp, EmailStatus::Failed, EmailAction::Delete, "DELETE /api/followup/failed/9"),
            (EmailType::FollowUp, EmailStatus::Failed, EmailAction::Reschedule, "POST /api/followup/failed/9/reschedule"),
            (EmailType::FollowUp, EmailStatus::Pending, EmailAction::Delete, "DELETE /api/followup/scheduled/9"),
        ];

        for (email_type, status, action, expected) in cases {
            let endpoint = resolve(email_type, status, action, 9).unwrap();
            assert_eq!(endpoint.to_string(), expected);
        }
    }

    #[test]
    fn test_allowed_actions_agree_with_resolve() {
        // Every (type, status, action) triple: resolvable iff listed
        for email_type in TYPES {
            for status in STATUSES {
                let allowed = allowed_actions(email_type, status);
                for action in ACTIONS {
                    let result = resolve(email_type, status, action, 1);
                    assert_eq!(
                        result.is_ok(),
                        allowed.contains(&action),
                        "{:?} {:?} {:?}",
                        email_type,
                        status,
                        action
                    );
                }
            }
        }
    }

    #[test]
    fn test_button_order_and_empty_rows() {
        assert_eq!(
            allowed_actions(EmailType::Invitation, EmailStatus::Failed),
            vec![EmailAction::Delete, EmailAction::Reschedule]
        );
        assert_eq!(
            allowed_actions(EmailType::FollowUp, EmailStatus::Sent),
            vec![EmailAction::FollowUp]
        );
        assert!(allowed_actions(EmailType::Unknown, EmailStatus::Sent).is_empty());
        assert!(allowed_actions(EmailType::FollowUp, EmailStatus::Unknown).is_empty());
    }

    #[test]
    fn test_rejected_combinations_are_descriptive() {
        let err = resolve(EmailType::Invitation, EmailStatus::Sent, EmailAction::Delete, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid action or email combination: delete for Invitation with status SENT"
        );

        assert!(resolve(EmailType::FollowUp, EmailStatus::Pending, EmailAction::Reschedule, 3).is_err());
        assert!(resolve(EmailType::Unknown, EmailStatus::Failed, EmailAction::Delete, 3).is_err());
        assert!(resolve(EmailType::Invitation, EmailStatus::Unknown, EmailAction::FollowUp, 3).is_err());
    }

    #[test]
    fn test_failed_invitation_from_dashboard() {
        let json = r#"{"combinedEmails":[{"id":1,"type":"Invitation","status":"FAILED","recipient":"a@b.com","company":"ACME"}]}"#;
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let record: EmailRecord = serde_json::from_value(value["combinedEmails"][0].clone()).unwrap();

        assert_eq!(record.allowed_actions(), vec![EmailAction::Delete, EmailAction::Reschedule]);
        let delete = resolve(record.email_type, record.status, EmailAction::Delete, record.id).unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.path, "/api/invitation/failed/1");
    }

    #[test]
    fn test_labels_and_payload_flag() {
        assert_eq!(EmailAction::FollowUp.label(EmailType::Invitation), "Send Follow-up");
        assert_eq!(EmailAction::FollowUp.label(EmailType::FollowUp), "Send Another Follow-up");
        assert_eq!(EmailAction::Delete.label(EmailType::FollowUp), "Delete");
        assert!(EmailAction::Reschedule.needs_scheduled_time());
        assert!(EmailAction::FollowUp.needs_scheduled_time());
        assert!(!EmailAction::Delete.needs_scheduled_time());
    }
}
