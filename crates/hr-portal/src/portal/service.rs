use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use super::domain::{
    Announcement, Employee, EmployeeStatus, JobListing, JobStatus, LeaveRequest, LeaveStatus,
    NewAnnouncement, NewEmployee, NewJobListing, NewLeaveRequest,
};
use super::stats::{DashboardBreakdowns, DashboardStats};
use super::store::{
    EntityStore, Notification, NotificationKind, NotificationSink, StoreError,
};
use super::views::{
    job_groupings, leave_groupings, visible_announcements, visible_employees,
    visible_job_listings, visible_leave_requests, AnnouncementFilter, EmployeeFilter, JobFilter,
    JobGroupings, LeaveFilter, LeaveGroupings,
};

/// Error raised by the portal service facade.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("leave request '{id}' is already {status}", status = .status.label())]
    InvalidTransition { id: String, status: LeaveStatus },
    #[error("employee '{0}' not found")]
    UnknownEmployee(String),
}

/// Single-writer facade over the entity store.
///
/// All mutations run to completion under one mutex; a failed operation never
/// applies partially and leaves the store usable. Outcomes of successful
/// mutations are emitted to the notification sink, fire-and-forget.
pub struct PortalService<N> {
    store: Mutex<EntityStore>,
    notifier: Arc<N>,
    breakdowns: DashboardBreakdowns,
    sequence: AtomicU64,
}

impl<N> PortalService<N>
where
    N: NotificationSink + 'static,
{
    pub fn new(store: EntityStore, notifier: Arc<N>, breakdowns: DashboardBreakdowns) -> Self {
        Self {
            store: Mutex::new(store),
            notifier,
            breakdowns,
            sequence: AtomicU64::new(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EntityStore> {
        self.store.lock().expect("store mutex poisoned")
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id:06}")
    }

    fn notify(&self, kind: NotificationKind, subject_id: &str, message: &str) {
        self.notifier.notify(Notification {
            kind,
            subject_id: subject_id.to_string(),
            message: message.to_string(),
        });
    }

    // ---- read side -------------------------------------------------------

    pub fn employees(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        visible_employees(&self.lock().employees.snapshot(), filter)
    }

    pub fn leave_requests(&self, filter: &LeaveFilter) -> Vec<LeaveRequest> {
        visible_leave_requests(&self.lock().leave_requests.snapshot(), filter)
    }

    pub fn leave_groupings(&self) -> LeaveGroupings {
        leave_groupings(&self.lock().leave_requests.snapshot())
    }

    pub fn announcements(&self, filter: &AnnouncementFilter) -> Vec<Announcement> {
        visible_announcements(&self.lock().announcements.snapshot(), filter)
    }

    pub fn job_listings(&self, filter: &JobFilter) -> Vec<JobListing> {
        visible_job_listings(&self.lock().job_listings.snapshot(), filter)
    }

    pub fn job_groupings(&self) -> JobGroupings {
        job_groupings(&self.lock().job_listings.snapshot())
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::compute(&self.lock(), &self.breakdowns)
    }

    // ---- write side ------------------------------------------------------

    /// Submit a leave request for an existing employee, snapshotting the
    /// employee's current name. Date ranges are accepted as given.
    pub fn submit_leave_request(
        &self,
        request: NewLeaveRequest,
        today: NaiveDate,
    ) -> Result<LeaveRequest, ServiceError> {
        let id = self.next_id("leave");
        let created = {
            let mut store = self.lock();
            let employee_name = store
                .employees
                .get(&request.employee_id)
                .map_err(|_| ServiceError::UnknownEmployee(request.employee_id.clone()))?
                .name
                .clone();

            store
                .leave_requests
                .insert(LeaveRequest {
                    id,
                    employee_id: request.employee_id,
                    employee_name,
                    leave_type: request.leave_type,
                    status: LeaveStatus::Pending,
                    start_date: request.start_date,
                    end_date: request.end_date,
                    reason: request.reason,
                    approver: None,
                    approved_date: None,
                    submitted_on: Some(today),
                })?
                .clone()
        };

        self.notify(
            NotificationKind::LeaveSubmitted,
            &created.id,
            "Your leave request has been submitted for approval.",
        );
        Ok(created)
    }

    /// Approve a pending request: status, approver, and decision date change;
    /// everything else is untouched.
    pub fn approve_leave(
        &self,
        request_id: &str,
        approver: &str,
        now: NaiveDate,
    ) -> Result<LeaveRequest, ServiceError> {
        let updated = self.decide(request_id, approver, now, LeaveStatus::Approved)?;
        self.notify(
            NotificationKind::LeaveApproved,
            request_id,
            "The leave request has been approved successfully.",
        );
        Ok(updated)
    }

    /// Reject a pending request, symmetric to approval.
    pub fn reject_leave(
        &self,
        request_id: &str,
        approver: &str,
        now: NaiveDate,
    ) -> Result<LeaveRequest, ServiceError> {
        let updated = self.decide(request_id, approver, now, LeaveStatus::Rejected)?;
        self.notify(
            NotificationKind::LeaveRejected,
            request_id,
            "The leave request has been rejected.",
        );
        Ok(updated)
    }

    fn decide(
        &self,
        request_id: &str,
        approver: &str,
        now: NaiveDate,
        decision: LeaveStatus,
    ) -> Result<LeaveRequest, ServiceError> {
        let mut store = self.lock();
        let current = store.leave_requests.get(request_id)?;
        if current.status != LeaveStatus::Pending {
            return Err(ServiceError::InvalidTransition {
                id: request_id.to_string(),
                status: current.status,
            });
        }

        let updated = store.leave_requests.update_by_id(request_id, |request| {
            request.status = decision;
            request.approver = Some(approver.to_string());
            request.approved_date = Some(now);
        })?;
        Ok(updated.clone())
    }

    /// Add a directory entry. New hires default to active.
    pub fn add_employee(&self, employee: NewEmployee) -> Result<Employee, ServiceError> {
        let id = self.next_id("emp");
        let created = self
            .lock()
            .employees
            .insert(Employee {
                id,
                name: employee.name,
                position: employee.position,
                department: employee.department,
                email: employee.email,
                phone: employee.phone,
                status: employee.status.unwrap_or(EmployeeStatus::Active),
                image_url: employee.image_url,
                start_date: employee.start_date,
                manager: employee.manager,
            })?
            .clone();

        self.notify(
            NotificationKind::EmployeeAdded,
            &created.id,
            &format!("{} has been added successfully.", created.name),
        );
        Ok(created)
    }

    /// Publish an announcement dated today. Announcements are immutable
    /// once posted.
    pub fn post_announcement(
        &self,
        announcement: NewAnnouncement,
        today: NaiveDate,
    ) -> Result<Announcement, ServiceError> {
        let id = self.next_id("ann");
        let created = self
            .lock()
            .announcements
            .insert(Announcement {
                id,
                title: announcement.title,
                content: announcement.content,
                date: today,
                author: announcement.author,
                priority: announcement.priority,
                category: announcement.category,
            })?
            .clone();

        self.notify(
            NotificationKind::AnnouncementPosted,
            &created.id,
            "The announcement has been published.",
        );
        Ok(created)
    }

    /// Post a job listing, opening today with zero applicants.
    pub fn post_job(
        &self,
        listing: NewJobListing,
        today: NaiveDate,
    ) -> Result<JobListing, ServiceError> {
        let id = self.next_id("job");
        let created = self
            .lock()
            .job_listings
            .insert(JobListing {
                id,
                title: listing.title,
                department: listing.department,
                location: listing.location,
                job_type: listing.job_type,
                status: JobStatus::Open,
                posted_date: today,
                applicants: 0,
                description: listing.description,
                requirements: listing.requirements,
            })?
            .clone();

        self.notify(
            NotificationKind::JobPosted,
            &created.id,
            "The job listing has been posted.",
        );
        Ok(created)
    }

    /// Plain field overlay: job listings have no enforced state machine, any
    /// of the three statuses may be set at any time.
    pub fn update_job_status(
        &self,
        job_id: &str,
        status: JobStatus,
    ) -> Result<JobListing, ServiceError> {
        let mut store = self.lock();
        let updated = store
            .job_listings
            .update_by_id(job_id, |listing| listing.status = status)?;
        Ok(updated.clone())
    }
}
