use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Alert,
    Warning,
    Info,
}

impl std::fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeKind::Alert => write!(f, "Alert"),
            NoticeKind::Warning => write!(f, "Warning"),
            NoticeKind::Info => write!(f, "Info"),
        }
    }
}

/// An entry in the notification tray.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// A fresh, unread notification stamped now.
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            sent_at: Utc::now(),
            read: false,
        }
    }

    pub fn time_ago(&self) -> String {
        relative_time(self.sent_at)
    }
}

/// Relative-time label for tray entries and report rows.
pub fn relative_time(when: DateTime<Utc>) -> String {
    let seconds = (Utc::now() - when).num_seconds();
    if seconds < 60 {
        // Covers clock skew too: anything in the future reads "just now"
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        when.format("%b %-d, %Y").to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(relative_time(Utc::now()), "just now");
        // Future timestamps fall into the same bucket
        assert_eq!(relative_time(Utc::now() + Duration::minutes(5)), "just now");
    }

    #[test]
    fn test_relative_time_minutes_and_hours() {
        assert_eq!(relative_time(Utc::now() - Duration::minutes(30)), "30m ago");
        assert_eq!(relative_time(Utc::now() - Duration::hours(2)), "2h ago");
    }

    #[test]
    fn test_relative_time_beyond_a_day_shows_date() {
        let when = Utc::now() - Duration::days(3);
        assert_eq!(relative_time(when), when.format("%b %-d, %Y").to_string());
    }
}
