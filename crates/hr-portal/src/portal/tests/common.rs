use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::portal::domain::{
    Announcement, AnnouncementCategory, AnnouncementPriority, Employee, EmployeeStatus,
    NewLeaveRequest,
};
use crate::portal::seed;
use crate::portal::service::PortalService;
use crate::portal::store::{Notification, NotificationSink};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Sink double recording every emitted notification.
#[derive(Default)]
pub(super) struct RecordingSink {
    events: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, event: Notification) {
        self.events.lock().expect("sink mutex poisoned").push(event);
    }
}

/// Service over the standard seed dataset with a recording sink.
pub(super) fn seeded_service() -> (PortalService<RecordingSink>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let service = PortalService::new(
        seed::standard_store(),
        sink.clone(),
        seed::standard_breakdowns(),
    );
    (service, sink)
}

pub(super) fn sick_leave_request(employee_id: &str) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id: employee_id.to_string(),
        leave_type: crate::portal::domain::LeaveType::Sick,
        start_date: date(2023, 9, 1),
        end_date: date(2023, 9, 3),
        reason: Some("Recovering from surgery".to_string()),
    }
}

pub(super) fn employee(id: &str, name: &str, position: &str, department: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        email: format!("{id}@company.com"),
        phone: "(555) 000-0000".to_string(),
        status: EmployeeStatus::Active,
        image_url: None,
        start_date: date(2022, 1, 1),
        manager: None,
    }
}

pub(super) fn announcement(id: &str, on: NaiveDate, category: AnnouncementCategory) -> Announcement {
    Announcement {
        id: id.to_string(),
        title: format!("Notice {id}"),
        content: "Details to follow.".to_string(),
        date: on,
        author: "HR Team".to_string(),
        priority: AnnouncementPriority::Medium,
        category,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
