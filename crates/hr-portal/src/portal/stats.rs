//! Dashboard aggregation: pure functions over the current store snapshot.

use serde::{Deserialize, Serialize};

use super::domain::{Announcement, EmployeeStatus, JobStatus, LeaveRequest, LeaveStatus};
use super::store::EntityStore;
use super::views::{visible_announcements, AnnouncementFilter};

/// How many announcements the dashboard headlines.
pub const RECENT_ANNOUNCEMENT_COUNT: usize = 3;

/// Leave request counts partitioned by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeaveStatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn count_by_status(requests: &[LeaveRequest]) -> LeaveStatusCounts {
    let mut counts = LeaveStatusCounts::default();
    for request in requests {
        match request.status {
            LeaveStatus::Pending => counts.pending += 1,
            LeaveStatus::Approved => counts.approved += 1,
            LeaveStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// The `n` most recently dated announcements, same ordering contract as the
/// announcements view (date descending, ties keep insertion order).
pub fn recent_announcements(announcements: &[Announcement], n: usize) -> Vec<Announcement> {
    let mut recent = visible_announcements(announcements, &AnnouncementFilter::default());
    recent.truncate(n);
    recent
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeaveCount {
    pub month: String,
    pub count: u32,
}

/// Fixed-shape summary tables supplied alongside the live collections.
///
/// The portal does not derive these: the upstream dashboard ships them as a
/// curated dataset independent of the records it displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardBreakdowns {
    pub department_distribution: Vec<DepartmentCount>,
    pub leaves_by_month: Vec<MonthlyLeaveCount>,
}

/// Summary statistics shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub active_employees: usize,
    pub on_leave_employees: usize,
    pub pending_leave_requests: usize,
    pub open_positions: usize,
    pub recent_announcements: Vec<Announcement>,
    pub department_distribution: Vec<DepartmentCount>,
    pub leaves_by_month: Vec<MonthlyLeaveCount>,
}

impl DashboardStats {
    /// Recomputed on demand from the current store snapshot; headline counts
    /// come from the live collections, breakdown tables pass through.
    pub fn compute(store: &EntityStore, breakdowns: &DashboardBreakdowns) -> Self {
        let by_employee_status = |status: EmployeeStatus| {
            store
                .employees
                .iter()
                .filter(|employee| employee.status == status)
                .count()
        };

        let leave_counts = count_by_status(&store.leave_requests.snapshot());
        let open_positions = store
            .job_listings
            .iter()
            .filter(|listing| listing.status == JobStatus::Open)
            .count();

        Self {
            total_employees: store.employees.len(),
            active_employees: by_employee_status(EmployeeStatus::Active),
            on_leave_employees: by_employee_status(EmployeeStatus::OnLeave),
            pending_leave_requests: leave_counts.pending,
            open_positions,
            recent_announcements: recent_announcements(
                &store.announcements.snapshot(),
                RECENT_ANNOUNCEMENT_COUNT,
            ),
            department_distribution: breakdowns.department_distribution.clone(),
            leaves_by_month: breakdowns.leaves_by_month.clone(),
        }
    }
}
