use serde::{Deserialize, Serialize};

use crate::models::{null_as_default, EmailRecord};
use crate::utils::COMPANY_PLACEHOLDER;

/// Body of `GET /api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sent: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_failed: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_scheduled: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sent_today: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sent_yesterday: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_today: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_yesterday: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled_today: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled_yesterday: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub combined_emails: Vec<EmailRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub total: u64,
    pub yesterday: u64,
    pub today: u64,
}

impl DashboardSummary {
    pub fn stat_cards(&self) -> [StatCard; 3] {
        [
            StatCard {
                label: "Emails Sent",
                total: self.total_sent,
                yesterday: self.sent_yesterday,
                today: self.sent_today,
            },
            StatCard {
                label: "Emails Failed",
                total: self.total_failed,
                yesterday: self.failed_yesterday,
                today: self.failed_today,
            },
            StatCard {
                label: "Emails Scheduled",
                total: self.total_scheduled,
                yesterday: self.scheduled_yesterday,
                today: self.scheduled_today,
            },
        ]
    }

    /// Companies for the filter dropdown, unique and sorted, placeholder excluded
    pub fn companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = self
            .combined_emails
            .iter()
            .filter_map(|e| e.company.as_deref())
            .filter(|c| !c.is_empty() && *c != COMPANY_PLACEHOLDER)
            .map(str::to_string)
            .collect();
        companies.sort();
        companies.dedup();
        companies
    }
}

/// Local filter over the combined email list (no network)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailFilter {
    pub query: String,
    pub company: Option<String>,
}

impl EmailFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.company.is_some()
    }

    pub fn matches(&self, email: &EmailRecord) -> bool {
        if !self.query.trim().is_empty()
            && !email
                .recipient
                .to_lowercase()
                .contains(&self.query.to_lowercase())
        {
            return false;
        }

        match &self.company {
            Some(company) => email.company.as_deref() == Some(company.as_str()),
            None => true,
        }
    }

    pub fn apply<'a>(&self, emails: &'a [EmailRecord]) -> Vec<&'a EmailRecord> {
        emails.iter().filter(|e| self.matches(e)).collect()
    }
}

/// "Showing X of Y <noun>" under filtered lists
pub fn showing_label(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {} of {} {}", shown, total, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailStatus, EmailType};

    fn record(id: i64, recipient: &str, company: Option<&str>) -> EmailRecord {
        EmailRecord {
            id,
            recipient: recipient.to_string(),
            company: company.map(str::to_string),
            scheduled_time: None,
            status: EmailStatus::Pending,
            email_type: EmailType::Invitation,
        }
    }

    #[test]
    fn test_missing_and_null_fields_default_to_zero() {
        let json = r#"{"totalSent":4,"sentToday":null,"combinedEmails":null}"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_sent, 4);
        assert_eq!(summary.sent_today, 0);
        assert_eq!(summary.failed_yesterday, 0);
        assert!(summary.combined_emails.is_empty());
    }

    #[test]
    fn test_stat_cards_pair_yesterday_today() {
        let summary = DashboardSummary {
            total_failed: 3,
            failed_yesterday: 1,
            failed_today: 2,
            ..Default::default()
        };
        let failed = summary.stat_cards()[1];
        assert_eq!(failed.label, "Emails Failed");
        assert_eq!((failed.total, failed.yesterday, failed.today), (3, 1, 2));
    }

    #[test]
    fn test_companies_unique_sorted_without_placeholder() {
        let summary = DashboardSummary {
            combined_emails: vec![
                record(1, "a@x.com", Some("Zeta")),
                record(2, "b@x.com", Some("ACME")),
                record(3, "c@x.com", Some("N/A")),
                record(4, "d@x.com", None),
                record(5, "e@x.com", Some("ACME")),
                record(6, "f@x.com", Some("")),
            ],
            ..Default::default()
        };
        assert_eq!(summary.companies(), vec!["ACME".to_string(), "Zeta".to_string()]);
    }

    #[test]
    fn test_filter_by_recipient_and_company() {
        let emails = vec![
            record(1, "Alice@ACME.com", Some("ACME")),
            record(2, "bob@acme.com", Some("ACME")),
            record(3, "alice@zeta.io", Some("Zeta")),
        ];

        let by_query = EmailFilter {
            query: "alice".to_string(),
            company: None,
        };
        let ids: Vec<i64> = by_query.apply(&emails).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let both = EmailFilter {
            query: "ALICE".to_string(),
            company: Some("ACME".to_string()),
        };
        let ids: Vec<i64> = both.apply(&emails).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);

        let blank = EmailFilter {
            query: "   ".to_string(),
            company: None,
        };
        assert!(!blank.is_active());
        assert_eq!(blank.apply(&emails).len(), 3);
    }

    #[test]
    fn test_clearing_filter_shows_everything() {
        let emails = vec![record(1, "a@x.com", Some("ACME")), record(2, "b@y.com", None)];
        let filter = EmailFilter {
            query: "a@".to_string(),
            company: Some("ACME".to_string()),
        };
        assert!(filter.is_active());
        assert_eq!(showing_label(filter.apply(&emails).len(), emails.len(), "emails"), "Showing 1 of 2 emails");

        let cleared = EmailFilter::default();
        assert!(!cleared.is_active());
        assert_eq!(showing_label(cleared.apply(&emails).len(), emails.len(), "emails"), "Showing 2 of 2 emails");
    }
}
