//! Read-only projections of the entity store for display.
//!
//! Every function here takes a collection snapshot and an explicit filter
//! configuration and returns the ordered visible subset. The store is never
//! mutated and ordering logic never leaks into it. An empty result is a
//! valid value, not an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::{
    Announcement, AnnouncementCategory, Employee, EmployeeStatus, JobListing, JobStatus,
    LeaveRequest, LeaveStatus,
};

/// Directory view configuration. `None` in any field means "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    /// Case-insensitive substring match against name or position.
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeFilter {
    fn matches(&self, employee: &Employee) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            employee.name.to_lowercase().contains(&term)
                || employee.position.to_lowercase().contains(&term)
        });
        let matches_department = self
            .department
            .as_deref()
            .is_none_or(|department| employee.department == department);
        let matches_status = self
            .status
            .is_none_or(|status| employee.status == status);

        matches_search && matches_department && matches_status
    }
}

/// Active predicates are ANDed; the result keeps store order.
pub fn visible_employees(employees: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveFilter {
    pub status: Option<LeaveStatus>,
}

/// Leave requests filtered by status, newest submission first.
///
/// Only requests created through the service carry a submission stamp; the
/// unstamped remainder keeps insertion order after them.
pub fn visible_leave_requests(requests: &[LeaveRequest], filter: &LeaveFilter) -> Vec<LeaveRequest> {
    let mut visible: Vec<LeaveRequest> = requests
        .iter()
        .filter(|request| {
            filter
                .status
                .is_none_or(|status| request.status == status)
        })
        .cloned()
        .collect();
    visible.sort_by(|a, b| match (a.submitted_on, b.submitted_on) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    visible
}

/// Fixed status partitions of the full leave collection, computed
/// independently of any primary filter. Each partition carries the same
/// newest-submission-first ordering as the main view.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveGroupings {
    pub all: Vec<LeaveRequest>,
    pub pending: Vec<LeaveRequest>,
    pub approved: Vec<LeaveRequest>,
    pub rejected: Vec<LeaveRequest>,
}

pub fn leave_groupings(requests: &[LeaveRequest]) -> LeaveGroupings {
    let ordered = visible_leave_requests(requests, &LeaveFilter::default());
    let by_status = |status: LeaveStatus| {
        ordered
            .iter()
            .filter(|request| request.status == status)
            .cloned()
            .collect()
    };

    LeaveGroupings {
        pending: by_status(LeaveStatus::Pending),
        approved: by_status(LeaveStatus::Approved),
        rejected: by_status(LeaveStatus::Rejected),
        all: ordered,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnouncementFilter {
    pub category: Option<AnnouncementCategory>,
}

/// Announcements filtered by category, most recent first. The sort is stable:
/// records dated the same day keep their insertion order.
pub fn visible_announcements(
    announcements: &[Announcement],
    filter: &AnnouncementFilter,
) -> Vec<Announcement> {
    let mut visible: Vec<Announcement> = announcements
        .iter()
        .filter(|announcement| {
            filter
                .category
                .is_none_or(|category| announcement.category == category)
        })
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub department: Option<String>,
}

/// Job listings filtered by status and department, newest posting first,
/// stable on ties.
pub fn visible_job_listings(listings: &[JobListing], filter: &JobFilter) -> Vec<JobListing> {
    let mut visible: Vec<JobListing> = listings
        .iter()
        .filter(|listing| {
            let matches_status = filter
                .status
                .is_none_or(|status| listing.status == status);
            let matches_department = filter
                .department
                .as_deref()
                .is_none_or(|department| listing.department == department);
            matches_status && matches_department
        })
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    visible
}

/// Fixed status partitions of the full job board.
#[derive(Debug, Clone, Serialize)]
pub struct JobGroupings {
    pub open: Vec<JobListing>,
    pub on_hold: Vec<JobListing>,
    pub closed: Vec<JobListing>,
}

pub fn job_groupings(listings: &[JobListing]) -> JobGroupings {
    let by_status = |status: JobStatus| {
        listings
            .iter()
            .filter(|listing| listing.status == status)
            .cloned()
            .collect()
    };

    JobGroupings {
        open: by_status(JobStatus::Open),
        on_hold: by_status(JobStatus::OnHold),
        closed: by_status(JobStatus::Closed),
    }
}
