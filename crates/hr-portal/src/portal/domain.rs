use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directory entry for a single member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub start_date: NaiveDate,
    /// Weak back-reference to another employee's id, not ownership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
}

impl EmployeeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "on-leave",
        }
    }
}

/// A request for time off, tracked from submission to a terminal decision.
///
/// `employee_name` is a snapshot taken when the request is submitted; it is
/// intentionally not re-synced if the directory entry is later renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<NaiveDate>,
    /// Stamped on requests created through the service; seeded history
    /// predates the stamp and carries `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
    Paternity,
    Unpaid,
}

impl LeaveType {
    pub const fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Unpaid => "unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Approved and rejected requests are immutable except for re-display.
    pub const fn is_terminal(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

/// Company-wide notice shown on the announcements board. Immutable once posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    pub priority: AnnouncementPriority,
    pub category: AnnouncementCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncementPriority {
    Low,
    Medium,
    High,
}

impl AnnouncementPriority {
    pub const fn label(self) -> &'static str {
        match self {
            AnnouncementPriority::Low => "low",
            AnnouncementPriority::Medium => "medium",
            AnnouncementPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnouncementCategory {
    General,
    Event,
    Policy,
    It,
    Other,
}

impl AnnouncementCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AnnouncementCategory::General => "general",
            AnnouncementCategory::Event => "event",
            AnnouncementCategory::Policy => "policy",
            AnnouncementCategory::It => "it",
            AnnouncementCategory::Other => "other",
        }
    }
}

/// Open position tracked by the recruitment board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub posted_date: NaiveDate,
    pub applicants: u32,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Open,
    Closed,
    OnHold,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
            JobStatus::OnHold => "on-hold",
        }
    }
}

/// Payload for the directory "add employee" action. The id is generated by
/// the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub manager: Option<String>,
}

/// Payload for the "request leave" action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewLeaveRequest {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Payload for the "new announcement" action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub author: String,
    pub priority: AnnouncementPriority,
    pub category: AnnouncementCategory,
}

/// Payload for the "post job" action. New listings always open with zero
/// applicants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewJobListing {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}
