use serde::{Deserialize, Serialize};

/// Registration waiting for admin approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub registration_date: Option<String>,
}

impl PendingUser {
    pub fn registration_label(&self) -> &str {
        match self.registration_date.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "Unknown",
        }
    }

    /// Search matches username (case-insensitive) or id
    pub fn matches(&self, term: &str) -> bool {
        self.username.to_lowercase().contains(&term.to_lowercase())
            || self.id.to_string().contains(term)
    }
}

pub fn filter_pending_users<'a>(users: &'a [PendingUser], term: &str) -> Vec<&'a PendingUser> {
    users.iter().filter(|u| u.matches(term)).collect()
}
