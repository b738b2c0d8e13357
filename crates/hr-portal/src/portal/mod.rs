//! Record lifecycle and derived-view engine for the HR portal.
//!
//! Four insertion-ordered collections (employees, leave requests,
//! announcements, job listings) live in the [`store::EntityStore`]. The
//! [`service::PortalService`] is the single-writer facade that creates
//! records, drives the leave-request state machine, and emits outcome
//! notifications; [`views`] and [`stats`] are pure read-side projections.

pub mod domain;
pub mod router;
pub mod seed;
pub mod service;
pub mod stats;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Announcement, AnnouncementCategory, AnnouncementPriority, Employee, EmployeeStatus,
    JobListing, JobStatus, JobType, LeaveRequest, LeaveStatus, LeaveType, NewAnnouncement,
    NewEmployee, NewJobListing, NewLeaveRequest,
};
pub use router::portal_router;
pub use service::{PortalService, ServiceError};
pub use stats::{
    count_by_status, recent_announcements, DashboardBreakdowns, DashboardStats, DepartmentCount,
    LeaveStatusCounts, MonthlyLeaveCount,
};
pub use store::{
    Collection, EntityStore, Notification, NotificationKind, NotificationSink, Record, StoreError,
};
pub use views::{
    job_groupings, leave_groupings, visible_announcements, visible_employees,
    visible_job_listings, visible_leave_requests, AnnouncementFilter, EmployeeFilter, JobFilter,
    JobGroupings, LeaveFilter, LeaveGroupings,
};
