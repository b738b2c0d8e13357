use serde::{Deserialize, Serialize};

use super::domain::{Announcement, Employee, JobListing, LeaveRequest};

/// Error enumeration for store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record '{0}' already exists")]
    DuplicateId(String),
    #[error("record '{0}' not found")]
    NotFound(String),
}

/// Anything the store can hold: identified by an opaque, immutable string id.
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Announcement {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for JobListing {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered collection of records, addressable by id.
///
/// Mutation never reorders: inserts append, updates replace in place. There
/// is no delete operation; the portal is append/amend only.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, rejecting duplicate ids.
    pub fn insert(&mut self, record: T) -> Result<&T, StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(self.records.last().expect("record just pushed"))
    }

    /// Overlay changes onto the record with the given id, leaving its
    /// position and every other record untouched.
    pub fn update_by_id(
        &mut self,
        id: &str,
        patch: impl FnOnce(&mut T),
    ) -> Result<&T, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch(record);
        Ok(record)
    }

    pub fn get(&self, id: &str) -> Result<&T, StoreError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ordered snapshot for the view layer.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.clone()
    }
}

/// The four in-memory collections backing the portal.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub employees: Collection<Employee>,
    pub leave_requests: Collection<LeaveRequest>,
    pub announcements: Collection<Announcement>,
    pub job_listings: Collection<JobListing>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Human-readable outcome event surfaced to the user (toast-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub subject_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    LeaveSubmitted,
    LeaveApproved,
    LeaveRejected,
    EmployeeAdded,
    AnnouncementPosted,
    JobPosted,
}

impl NotificationKind {
    pub const fn label(self) -> &'static str {
        match self {
            NotificationKind::LeaveSubmitted => "leave-submitted",
            NotificationKind::LeaveApproved => "leave-approved",
            NotificationKind::LeaveRejected => "leave-rejected",
            NotificationKind::EmployeeAdded => "employee-added",
            NotificationKind::AnnouncementPosted => "announcement-posted",
            NotificationKind::JobPosted => "job-posted",
        }
    }
}

/// Trait describing the outbound toast/alert hook. Fire-and-forget: the
/// portal never retries and ignores delivery concerns.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: Notification);
}
