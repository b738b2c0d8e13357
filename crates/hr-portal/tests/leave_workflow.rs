//! Integration scenarios for the leave-request workflow driven through the
//! public service facade, end to end over the seeded portal state.

mod common {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use hr_portal::portal::seed;
    use hr_portal::portal::{Notification, NotificationSink, PortalService};

    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<Notification> {
            self.events.lock().expect("sink mutex poisoned").clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, event: Notification) {
            self.events.lock().expect("sink mutex poisoned").push(event);
        }
    }

    pub fn seeded_service() -> (Arc<PortalService<RecordingSink>>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let service = Arc::new(PortalService::new(
            seed::standard_store(),
            sink.clone(),
            seed::standard_breakdowns(),
        ));
        (service, sink)
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }
}

use common::{date, seeded_service};
use hr_portal::portal::{
    LeaveFilter, LeaveStatus, LeaveType, NewLeaveRequest, NotificationKind, ServiceError,
};

fn sick_leave(employee_id: &str) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id: employee_id.to_string(),
        leave_type: LeaveType::Sick,
        start_date: date(2023, 9, 1),
        end_date: date(2023, 9, 3),
        reason: Some("Recovering from surgery".to_string()),
    }
}

#[test]
fn leave_request_lifecycle_from_submission_to_approval() {
    let (service, sink) = seeded_service();

    let created = service
        .submit_leave_request(sick_leave("e001"), date(2023, 8, 31))
        .expect("submission succeeds");
    assert_eq!(created.status, LeaveStatus::Pending);
    assert_eq!(created.employee_name, "John Doe");

    let groupings = service.leave_groupings();
    assert!(groupings.pending.iter().any(|r| r.id == created.id));
    assert!(!groupings.approved.iter().any(|r| r.id == created.id));
    assert!(!groupings.rejected.iter().any(|r| r.id == created.id));

    let approved = service
        .approve_leave(&created.id, "Jane Smith", date(2023, 9, 4))
        .expect("approval succeeds");
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.approver.as_deref(), Some("Jane Smith"));
    assert_eq!(approved.approved_date, Some(date(2023, 9, 4)));

    let groupings = service.leave_groupings();
    assert!(!groupings.pending.iter().any(|r| r.id == created.id));
    assert!(groupings.approved.iter().any(|r| r.id == created.id));

    match service.approve_leave(&created.id, "Jane Smith", date(2023, 9, 5)) {
        Err(ServiceError::InvalidTransition { status, .. }) => {
            assert_eq!(status, LeaveStatus::Approved);
        }
        other => panic!("expected invalid transition, got {other:?}"),
    }

    let kinds: Vec<_> = sink.events().iter().map(|event| event.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::LeaveSubmitted,
            NotificationKind::LeaveApproved,
        ]
    );
}

#[test]
fn failed_submission_leaves_the_collection_untouched() {
    let (service, sink) = seeded_service();
    let before = service.leave_requests(&LeaveFilter::default());

    match service.submit_leave_request(sick_leave("e999"), date(2023, 8, 31)) {
        Err(ServiceError::UnknownEmployee(id)) => assert_eq!(id, "e999"),
        other => panic!("expected unknown employee, got {other:?}"),
    }

    let after = service.leave_requests(&LeaveFilter::default());
    assert_eq!(after, before);
    assert!(sink.events().is_empty());
}

#[test]
fn newest_submission_displays_first() {
    let (service, _sink) = seeded_service();

    let first = service
        .submit_leave_request(sick_leave("e001"), date(2023, 8, 20))
        .expect("first submission");
    let second = service
        .submit_leave_request(sick_leave("e002"), date(2023, 8, 25))
        .expect("second submission");

    let visible = service.leave_requests(&LeaveFilter::default());
    assert_eq!(visible[0].id, second.id);
    assert_eq!(visible[1].id, first.id);
    // Seed history follows in its original order.
    assert_eq!(visible[2].id, "l001");
}
