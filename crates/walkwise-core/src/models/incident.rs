use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum photo attachments per report.
/// Five keeps the mock upload list readable.
pub const MAX_REPORT_PHOTOS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentCategory {
    Theft,
    Assault,
    Suspicious,
    Harassment,
    Vandalism,
    Infrastructure,
    Other,
}

impl IncidentCategory {
    /// Selection order for the report form.
    pub const ALL: [IncidentCategory; 7] = [
        IncidentCategory::Theft,
        IncidentCategory::Assault,
        IncidentCategory::Suspicious,
        IncidentCategory::Harassment,
        IncidentCategory::Vandalism,
        IncidentCategory::Infrastructure,
        IncidentCategory::Other,
    ];
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentCategory::Theft => write!(f, "Theft/Robbery"),
            IncidentCategory::Assault => write!(f, "Assault"),
            IncidentCategory::Suspicious => write!(f, "Suspicious Activity"),
            IncidentCategory::Harassment => write!(f, "Harassment"),
            IncidentCategory::Vandalism => write!(f, "Vandalism"),
            IncidentCategory::Infrastructure => write!(f, "Infrastructure Issue"),
            IncidentCategory::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Longer label used in the report form selector.
    pub fn form_label(self) -> &'static str {
        match self {
            Severity::Low => "Low - Minor Issue",
            Severity::Medium => "Medium - Concerning",
            Severity::High => "High - Immediate Attention",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Reviewing,
    Verified,
    Rejected,
}

impl ReportStatus {
    /// Whether a moderator can still act on a report in this status.
    pub fn is_open(self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::Reviewing)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "Pending"),
            ReportStatus::Reviewing => write!(f, "Reviewing"),
            ReportStatus::Verified => write!(f, "Verified"),
            ReportStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A community incident report, either a seed fixture or a user submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: String,
    pub category: IncidentCategory,
    pub location: String,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub severity: Severity,
    pub status: ReportStatus,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl IncidentReport {
    pub fn time_ago(&self) -> String {
        super::notification::relative_time(self.occurred_at)
    }
}

/// In-progress report form state.
///
/// Date and time are kept as the user's raw text and only parsed on submit,
/// so partial input never blocks typing.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub category: Option<IncidentCategory>,
    pub severity: Severity,
    pub location: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub photos: Vec<String>,
}

impl ReportDraft {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            category: None,
            severity: Severity::Medium,
            location: String::new(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            description: String::new(),
            photos: Vec::new(),
        }
    }

    /// First problem with the draft, if any, as user-visible text.
    pub fn validate(&self) -> Result<(), String> {
        if self.category.is_none() {
            return Err("Please select an incident type".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if self.photos.len() > MAX_REPORT_PHOTOS {
            return Err(format!("Maximum {} photos allowed", MAX_REPORT_PHOTOS));
        }
        if self.parse_date().is_none() {
            return Err("Date must be YYYY-MM-DD".to_string());
        }
        if self.parse_time().is_none() {
            return Err("Time must be HH:MM".to_string());
        }
        Ok(())
    }

    /// Combined occurrence timestamp, if the date and time fields parse.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        let date = self.parse_date()?;
        let time = self.parse_time()?;
        Some(date.and_time(time).and_utc())
    }

    fn parse_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    fn parse_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok()
    }
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ReportDraft {
        ReportDraft {
            category: Some(IncidentCategory::Theft),
            severity: Severity::High,
            location: "Main St & 5th Ave".to_string(),
            date: "2025-08-01".to_string(),
            time: "21:30".to_string(),
            description: "Phone snatched near the subway entrance".to_string(),
            photos: Vec::new(),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(filled_draft().validate().is_ok());
    }

    #[test]
    fn test_draft_requires_category() {
        let mut draft = filled_draft();
        draft.category = None;
        assert_eq!(
            draft.validate().unwrap_err(),
            "Please select an incident type"
        );
    }

    #[test]
    fn test_draft_requires_location_and_description() {
        let mut draft = filled_draft();
        draft.location = "  ".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Location is required");

        let mut draft = filled_draft();
        draft.description = String::new();
        assert_eq!(draft.validate().unwrap_err(), "Description is required");
    }

    #[test]
    fn test_draft_caps_photos() {
        let mut draft = filled_draft();
        draft.photos = (0..6).map(|i| format!("photo_{}.jpg", i)).collect();
        assert!(draft.validate().is_err());

        draft.photos.truncate(MAX_REPORT_PHOTOS);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_unparseable_date_or_time() {
        let mut draft = filled_draft();
        draft.date = "08/01/2025".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Date must be YYYY-MM-DD");

        let mut draft = filled_draft();
        draft.time = "9pm".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Time must be HH:MM");
    }

    #[test]
    fn test_occurred_at_combines_fields() {
        let draft = filled_draft();
        let at = draft.occurred_at().unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2025-08-01 21:30");
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = ReportDraft::new();
        assert!(draft.category.is_none());
        assert_eq!(draft.severity, Severity::Medium);
        assert!(draft.photos.is_empty());
        // Defaults to the current date/time, which must itself parse.
        assert!(draft.occurred_at().is_some());
    }
}
