use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utils::{parse_local_datetime, BULK_FILE_EXTENSIONS};

lazy_static::lazy_static! {
    static ref ACADEMIC_YEAR: Regex = Regex::new(r"^\d{4}-\d{2}$").expect("valid regex");
}

/// Toggle of the schedule form: first contact or follow-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    #[default]
    Invitation,
    FollowUp,
}

impl ScheduleKind {
    pub fn path(&self) -> &'static str {
        match self {
            ScheduleKind::Invitation => "/api/emails/schedule",
            ScheduleKind::FollowUp => "/api/emails/followupschedule",
        }
    }

    pub fn bulk_path(&self) -> String {
        format!("{}/bulk", self.path())
    }

    /// Rank and NIRF year are only asked for invitations
    pub fn collects_ranking(&self) -> bool {
        matches!(self, ScheduleKind::Invitation)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ScheduleKind::Invitation => ScheduleKind::FollowUp,
            ScheduleKind::FollowUp => ScheduleKind::Invitation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleKind::Invitation => "Invitation",
            ScheduleKind::FollowUp => "Follow-up",
        }
    }
}

/// Body of single scheduling calls; wire names are the backend's
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub recipient: String,
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: String,
    pub company: String,
    pub name: String,
    #[serde(rename = "phone_Number")]
    pub phone_number: String,
    pub rank: String,
    pub salutation: String,
    #[serde(rename = "nirfYear")]
    pub nirf_year: String,
    pub designation: String,
    pub year: String,
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

impl ScheduleRequest {
    /// Drops fields the chosen kind does not collect
    pub fn for_kind(mut self, kind: ScheduleKind) -> Self {
        if !kind.collects_ranking() {
            self.rank.clear();
            self.nirf_year.clear();
        }
        self
    }

    pub fn validate(&self, kind: ScheduleKind) -> Result<(), ValidationError> {
        require(&self.recipient, "recipient")?;
        require(&self.scheduled_time, "scheduled time")?;
        if parse_local_datetime(&self.scheduled_time).is_none() {
            return Err(ValidationError::InvalidDateTime(self.scheduled_time.clone()));
        }

        require(&self.company, "company")?;
        require(&self.salutation, "salutation")?;

        if kind.collects_ranking() {
            require(&self.rank, "rank")?;
            require(&self.nirf_year, "NIRF year")?;
        }

        require(&self.year, "year")?;
        if !ACADEMIC_YEAR.is_match(self.year.trim()) {
            return Err(ValidationError::InvalidYear(self.year.clone()));
        }

        Ok(())
    }
}

/// Bulk upload accepts spreadsheets only; contents are parsed server-side
pub fn validate_bulk_file_name(file_name: Option<&str>) -> Result<(), ValidationError> {
    let name = file_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::MissingFile)?;
    let lower = name.to_lowercase();
    if BULK_FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFile(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitation() -> ScheduleRequest {
        ScheduleRequest {
            recipient: "dean@uni.edu".to_string(),
            scheduled_time: "2025-04-01T10:30".to_string(),
            company: "ACME".to_string(),
            rank: "12".to_string(),
            salutation: "Dear Sir".to_string(),
            nirf_year: "2024".to_string(),
            year: "2024-25".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(ScheduleKind::Invitation.path(), "/api/emails/schedule");
        assert_eq!(ScheduleKind::FollowUp.path(), "/api/emails/followupschedule");
        assert_eq!(ScheduleKind::FollowUp.bulk_path(), "/api/emails/followupschedule/bulk");
        assert_eq!(ScheduleKind::Invitation.toggled(), ScheduleKind::FollowUp);
    }

    #[test]
    fn test_valid_invitation() {
        assert_eq!(invitation().validate(ScheduleKind::Invitation), Ok(()));
    }

    #[test]
    fn test_follow_up_does_not_need_ranking() {
        let request = ScheduleRequest {
            rank: String::new(),
            nirf_year: String::new(),
            ..invitation()
        };
        assert_eq!(
            request.validate(ScheduleKind::Invitation),
            Err(ValidationError::MissingField("rank"))
        );
        assert_eq!(request.validate(ScheduleKind::FollowUp), Ok(()));
    }

    #[test]
    fn test_rejects_malformed_inputs() {
        let bad_time = ScheduleRequest {
            scheduled_time: "01/04/2025 10:30".to_string(),
            ..invitation()
        };
        assert!(matches!(
            bad_time.validate(ScheduleKind::Invitation),
            Err(ValidationError::InvalidDateTime(_))
        ));

        let bad_year = ScheduleRequest {
            year: "2024-2025".to_string(),
            ..invitation()
        };
        assert!(matches!(
            bad_year.validate(ScheduleKind::Invitation),
            Err(ValidationError::InvalidYear(_))
        ));

        let no_recipient = ScheduleRequest {
            recipient: "  ".to_string(),
            ..invitation()
        };
        assert_eq!(
            no_recipient.validate(ScheduleKind::Invitation),
            Err(ValidationError::MissingField("recipient"))
        );
    }

    #[test]
    fn test_recipient_is_taken_as_entered() {
        let request = ScheduleRequest {
            recipient: "placement office".to_string(),
            ..invitation()
        };
        assert_eq!(request.validate(ScheduleKind::Invitation), Ok(()));
    }

    #[test]
    fn test_for_kind_blanks_ranking_and_wire_names() {
        let request = invitation().for_kind(ScheduleKind::FollowUp);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["rank"], "");
        assert_eq!(value["nirfYear"], "");
        assert_eq!(value["scheduledTime"], "2025-04-01T10:30");
        assert_eq!(value["phone_Number"], "");
    }

    #[test]
    fn test_bulk_file_names() {
        assert_eq!(validate_bulk_file_name(Some("list.xlsx")), Ok(()));
        assert_eq!(validate_bulk_file_name(Some("LIST.XLS")), Ok(()));
        assert_eq!(validate_bulk_file_name(None), Err(ValidationError::MissingFile));
        assert_eq!(validate_bulk_file_name(Some(" ")), Err(ValidationError::MissingFile));
        assert!(matches!(
            validate_bulk_file_name(Some("list.csv")),
            Err(ValidationError::UnsupportedFile(_))
        ));
    }
}
