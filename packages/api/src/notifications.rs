//! # Notification sync
//!
//! A notification is a report whose claim status concerns the current
//! viewer. Admins see every claimed report; a user sees their own lost
//! reports once claimed, and found reports claimed *by* them.
//!
//! [`sync_notifications`] runs once per authenticated mount: fetch, filter,
//! sort newest-first, count unread, then mark everything unread as read in a
//! concurrent fan-out. The unread count reported to the UI is the one
//! observed *before* the fan-out, so the badge reflects what was new when
//! the page loaded.

use store::{Report, ReportType, Role, User};

use crate::error::ApiError;

/// The backend's report surface, as far as notifications are concerned.
pub trait ReportsGateway {
    async fn list_reports(&self, viewer: &User) -> Result<Vec<Report>, ApiError>;
    async fn mark_read(&self, viewer: &User, report_id: &str) -> Result<(), ApiError>;
}

/// Result of one sync pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    /// Visible notifications, newest first.
    pub notifications: Vec<Report>,
    /// How many were unread at fetch time, before the mark-as-read fan-out.
    pub unread_count: usize,
}

/// Whether `report` is visible as a notification to `viewer`.
pub fn is_notification_for(report: &Report, viewer: &User) -> bool {
    match viewer.role {
        Role::Admin => report.claimed_by.is_some(),
        Role::User => match report.report_type {
            ReportType::Lost => {
                report.user.email == viewer.email && report.claimed_by.is_some()
            }
            ReportType::Found => report.claimed_by.as_deref() == Some(viewer.email.as_str()),
        },
    }
}

/// Filter to the viewer's notifications and sort descending by `createdAt`.
/// The sort is stable, so equal timestamps keep their input order.
pub fn select_notifications(reports: Vec<Report>, viewer: &User) -> Vec<Report> {
    let mut selected: Vec<Report> = reports
        .into_iter()
        .filter(|report| is_notification_for(report, viewer))
        .collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected
}

/// Fetch, filter, count, and mark read. The fan-out settles every request
/// before the sync is considered done; individual mark-read failures are
/// logged and do not stop the others. A fetch failure is returned to the
/// caller, which degrades to an empty feed.
pub async fn sync_notifications<G: ReportsGateway>(
    gateway: &G,
    viewer: &User,
) -> Result<NotificationFeed, ApiError> {
    let reports = gateway.list_reports(viewer).await?;
    let notifications = select_notifications(reports, viewer);
    let unread_count = notifications.iter().filter(|n| !n.read).count();

    let pending: Vec<_> = notifications
        .iter()
        .filter(|n| !n.read)
        .map(|n| mark_one(gateway, viewer, &n.id))
        .collect();
    futures::future::join_all(pending).await;

    Ok(NotificationFeed {
        notifications,
        unread_count,
    })
}

async fn mark_one<G: ReportsGateway>(gateway: &G, viewer: &User, report_id: &str) {
    if let Err(err) = gateway.mark_read(viewer, report_id).await {
        tracing::warn!("failed to mark notification {report_id} as read: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use store::Reporter;

    fn report(id: &str, report_type: ReportType, reporter: &str, claimed_by: Option<&str>) -> Report {
        Report {
            id: id.into(),
            report_type,
            item_name: "ID card".into(),
            description: String::new(),
            location: "Library".into(),
            image: None,
            user: Reporter {
                email: reporter.into(),
                first_name: None,
            },
            claimed_by: claimed_by.map(str::to_string),
            verified: false,
            read: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn viewer(email: &str, role: Role) -> User {
        User {
            id: "v1".into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            role,
            token: "tok".into(),
            verified: true,
        }
    }

    #[test]
    fn found_report_notifies_its_claimant_only() {
        let found = report("r1", ReportType::Found, "finder@x.edu", Some("a@x.edu"));
        assert!(is_notification_for(&found, &viewer("a@x.edu", Role::User)));
        assert!(!is_notification_for(&found, &viewer("b@x.edu", Role::User)));
    }

    #[test]
    fn lost_report_notifies_its_reporter_once_claimed() {
        let claimed = report("r1", ReportType::Lost, "a@x.edu", Some("b@x.edu"));
        let unclaimed = report("r2", ReportType::Lost, "a@x.edu", None);
        assert!(is_notification_for(&claimed, &viewer("a@x.edu", Role::User)));
        assert!(!is_notification_for(&unclaimed, &viewer("a@x.edu", Role::User)));
        assert!(!is_notification_for(&claimed, &viewer("b@x.edu", Role::User)));
    }

    #[test]
    fn admin_sees_every_claimed_report() {
        let admin = viewer("dean@campus.edu", Role::Admin);
        let claimed = report("r1", ReportType::Found, "x@x.edu", Some("y@x.edu"));
        let unclaimed = report("r2", ReportType::Lost, "x@x.edu", None);
        assert!(is_notification_for(&claimed, &admin));
        assert!(!is_notification_for(&unclaimed, &admin));
    }

    #[test]
    fn selection_sorts_newest_first() {
        let admin = viewer("dean@campus.edu", Role::Admin);
        let mut jan = report("jan", ReportType::Found, "x@x.edu", Some("y@x.edu"));
        jan.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut mar = report("mar", ReportType::Found, "x@x.edu", Some("y@x.edu"));
        mar.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut feb = report("feb", ReportType::Found, "x@x.edu", Some("y@x.edu"));
        feb.created_at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        let selected = select_notifications(vec![jan, mar, feb], &admin);
        let order: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["mar", "feb", "jan"]);
    }

    struct FakeReports {
        reports: Mutex<Vec<Report>>,
        failing: HashSet<String>,
        mark_calls: Mutex<Vec<String>>,
    }

    impl FakeReports {
        fn new(reports: Vec<Report>) -> Self {
            Self {
                reports: Mutex::new(reports),
                failing: HashSet::new(),
                mark_calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, id: &str) -> Self {
            self.failing.insert(id.to_string());
            self
        }
    }

    impl ReportsGateway for FakeReports {
        async fn list_reports(&self, _viewer: &User) -> Result<Vec<Report>, ApiError> {
            Ok(self.reports.lock().unwrap().clone())
        }

        async fn mark_read(&self, _viewer: &User, report_id: &str) -> Result<(), ApiError> {
            self.mark_calls.lock().unwrap().push(report_id.to_string());
            if self.failing.contains(report_id) {
                return Err(ApiError::Backend {
                    status: 500,
                    message: "boom".into(),
                });
            }
            for report in self.reports.lock().unwrap().iter_mut() {
                if report.id == report_id {
                    report.read = true;
                }
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn sync_counts_unread_then_marks_them_read() {
        let user = viewer("a@x.edu", Role::User);
        let mut already_read = report("r1", ReportType::Found, "f@x.edu", Some("a@x.edu"));
        already_read.read = true;
        let fresh = report("r2", ReportType::Found, "f@x.edu", Some("a@x.edu"));
        let not_mine = report("r3", ReportType::Found, "f@x.edu", Some("b@x.edu"));

        let gateway = FakeReports::new(vec![already_read, fresh, not_mine]);
        let feed = sync_notifications(&gateway, &user).await.unwrap();

        assert_eq!(feed.notifications.len(), 2);
        assert_eq!(feed.unread_count, 1);

        // Only the unread visible one was marked, and a refetch now shows it read.
        assert_eq!(*gateway.mark_calls.lock().unwrap(), vec!["r2".to_string()]);
        let after = sync_notifications(&gateway, &user).await.unwrap();
        assert_eq!(after.unread_count, 0);
        assert!(after.notifications.iter().all(|n| n.read));
    }

    #[tokio::test]
    async fn one_failing_mark_does_not_stop_the_others() {
        let user = viewer("a@x.edu", Role::User);
        let first = report("r1", ReportType::Found, "f@x.edu", Some("a@x.edu"));
        let second = report("r2", ReportType::Found, "f@x.edu", Some("a@x.edu"));
        let third = report("r3", ReportType::Found, "f@x.edu", Some("a@x.edu"));

        let gateway = FakeReports::new(vec![first, second, third]).failing_on("r2");
        let feed = sync_notifications(&gateway, &user).await.unwrap();
        assert_eq!(feed.unread_count, 3);

        let mut calls = gateway.mark_calls.lock().unwrap().clone();
        calls.sort();
        assert_eq!(calls, ["r1", "r2", "r3"]);

        // r1 and r3 really flipped; r2 stayed unread.
        let reports = gateway.reports.lock().unwrap();
        assert!(reports.iter().find(|r| r.id == "r1").unwrap().read);
        assert!(!reports.iter().find(|r| r.id == "r2").unwrap().read);
        assert!(reports.iter().find(|r| r.id == "r3").unwrap().read);
    }

    struct BrokenGateway;

    impl ReportsGateway for BrokenGateway {
        async fn list_reports(&self, _viewer: &User) -> Result<Vec<Report>, ApiError> {
            Err(ApiError::Backend {
                status: 503,
                message: "unavailable".into(),
            })
        }

        async fn mark_read(&self, _viewer: &User, _report_id: &str) -> Result<(), ApiError> {
            unreachable!("mark_read must not run when the fetch failed")
        }
    }

    #[tokio::test]
    async fn fetch_failure_surfaces_to_the_caller() {
        let user = viewer("a@x.edu", Role::User);
        assert!(sync_notifications(&BrokenGateway, &user).await.is_err());
    }
}
