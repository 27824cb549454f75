//! In-memory ledger of community incident reports.
//!
//! Seeded from the directory's fixture reports; user submissions join the
//! ledger with a generated id and `pending` status. Moderation (verify /
//! reject) backs the admin panel. Nothing here is persisted.

use tracing::debug;
use uuid::Uuid;

use crate::models::{IncidentReport, ReportDraft, ReportStatus};

/// Report totals per status, shown on the admin panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub reviewing: usize,
    pub verified: usize,
    pub rejected: usize,
}

pub struct ReportLedger {
    reports: Vec<IncidentReport>,
}

impl ReportLedger {
    /// Ledger seeded with fixture reports, newest first.
    pub fn new(seed: Vec<IncidentReport>) -> Self {
        Self { reports: seed }
    }

    pub fn reports(&self) -> &[IncidentReport] {
        &self.reports
    }

    pub fn get(&self, id: &str) -> Option<&IncidentReport> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Validate a draft and add it to the ledger.
    ///
    /// Returns the stored report so the form can confirm the submission;
    /// the error is the draft's first validation problem.
    pub fn submit(&mut self, draft: &ReportDraft) -> Result<IncidentReport, String> {
        draft.validate()?;

        let report = IncidentReport {
            id: Uuid::new_v4().to_string(),
            // Validation guarantees the category and timestamp parse.
            category: draft.category.ok_or("Please select an incident type")?,
            location: draft.location.trim().to_string(),
            occurred_at: draft.occurred_at().ok_or("Date must be YYYY-MM-DD")?,
            description: draft.description.trim().to_string(),
            severity: draft.severity,
            status: ReportStatus::Pending,
            photos: draft.photos.clone(),
        };

        debug!(id = %report.id, "Report submitted");
        self.reports.insert(0, report.clone());
        Ok(report)
    }

    /// Move a pending report into review. Returns whether anything changed.
    pub fn start_review(&mut self, id: &str) -> bool {
        self.transition(id, ReportStatus::Pending, ReportStatus::Reviewing)
    }

    /// Verify an open report.
    pub fn verify(&mut self, id: &str) -> bool {
        self.close(id, ReportStatus::Verified)
    }

    /// Reject an open report.
    pub fn reject(&mut self, id: &str) -> bool {
        self.close(id, ReportStatus::Rejected)
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for report in &self.reports {
            match report.status {
                ReportStatus::Pending => counts.pending += 1,
                ReportStatus::Reviewing => counts.reviewing += 1,
                ReportStatus::Verified => counts.verified += 1,
                ReportStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    fn transition(&mut self, id: &str, from: ReportStatus, to: ReportStatus) -> bool {
        match self.reports.iter_mut().find(|r| r.id == id) {
            Some(report) if report.status == from => {
                report.status = to;
                debug!(id, from = %from, to = %to, "Report status changed");
                true
            }
            _ => false,
        }
    }

    fn close(&mut self, id: &str, to: ReportStatus) -> bool {
        match self.reports.iter_mut().find(|r| r.id == id) {
            Some(report) if report.status.is_open() => {
                let from = report.status;
                report.status = to;
                debug!(id, from = %from, to = %to, "Report closed");
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures;
    use crate::models::{IncidentCategory, Severity};

    fn seeded() -> ReportLedger {
        ReportLedger::new(fixtures::seed_reports())
    }

    fn valid_draft() -> ReportDraft {
        ReportDraft {
            category: Some(IncidentCategory::Vandalism),
            severity: Severity::Low,
            location: "Pine St".to_string(),
            date: "2025-08-20".to_string(),
            time: "18:00".to_string(),
            description: "Graffiti on the underpass wall".to_string(),
            photos: vec!["underpass.jpg".to_string()],
        }
    }

    #[test]
    fn test_submit_adds_a_pending_report_up_front() {
        let mut ledger = seeded();
        let before = ledger.reports().len();

        let report = ledger.submit(&valid_draft()).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(ledger.reports().len(), before + 1);
        assert_eq!(ledger.reports()[0].id, report.id);
        assert_eq!(ledger.reports()[0].photos.len(), 1);
    }

    #[test]
    fn test_submit_rejects_an_invalid_draft() {
        let mut ledger = seeded();
        let mut draft = valid_draft();
        draft.description = String::new();

        let err = ledger.submit(&draft).unwrap_err();
        assert_eq!(err, "Description is required");
        assert_eq!(ledger.reports().len(), 4);
    }

    #[test]
    fn test_submitted_ids_are_unique() {
        let mut ledger = seeded();
        let first = ledger.submit(&valid_draft()).unwrap();
        let second = ledger.submit(&valid_draft()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_verify_closes_an_open_report() {
        let mut ledger = seeded();
        // Fixture "3" starts pending.
        assert!(ledger.verify("3"));
        assert_eq!(ledger.get("3").unwrap().status, ReportStatus::Verified);

        // Closed reports stay closed.
        assert!(!ledger.reject("3"));
    }

    #[test]
    fn test_reject_requires_an_open_report() {
        let mut ledger = seeded();
        // Fixture "4" is already rejected.
        assert!(!ledger.reject("4"));
        // Fixture "2" is reviewing, still open.
        assert!(ledger.reject("2"));
        assert_eq!(ledger.get("2").unwrap().status, ReportStatus::Rejected);
    }

    #[test]
    fn test_start_review_only_from_pending() {
        let mut ledger = seeded();
        assert!(ledger.start_review("3"));
        assert_eq!(ledger.get("3").unwrap().status, ReportStatus::Reviewing);
        // Already reviewing now.
        assert!(!ledger.start_review("3"));
        // Verified fixture cannot re-enter review.
        assert!(!ledger.start_review("1"));
    }

    #[test]
    fn test_counts_track_the_seeded_statuses() {
        let counts = seeded().counts();
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                reviewing: 1,
                verified: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_unknown_report_id_changes_nothing() {
        let mut ledger = seeded();
        assert!(!ledger.verify("missing"));
        assert!(!ledger.start_review("missing"));
        assert!(ledger.get("missing").is_none());
    }
}
