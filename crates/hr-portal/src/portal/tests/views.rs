use super::common::*;
use crate::portal::domain::{AnnouncementCategory, EmployeeStatus, JobStatus, LeaveStatus};
use crate::portal::seed;
use crate::portal::views::{
    job_groupings, leave_groupings, visible_announcements, visible_employees,
    visible_job_listings, visible_leave_requests, AnnouncementFilter, EmployeeFilter, JobFilter,
    LeaveFilter,
};

#[test]
fn default_filter_is_the_identity_projection() {
    let store = seed::standard_store();
    let employees = store.employees.snapshot();

    let visible = visible_employees(&employees, &EmployeeFilter::default());
    assert_eq!(visible, employees);

    let requests = store.leave_requests.snapshot();
    let visible = visible_leave_requests(&requests, &LeaveFilter::default());
    assert_eq!(
        visible, requests,
        "unstamped seed history keeps insertion order"
    );
}

#[test]
fn department_filter_partitions_without_loss() {
    let store = seed::standard_store();
    let employees = store.employees.snapshot();

    let filter = EmployeeFilter {
        department: Some("Engineering".to_string()),
        ..EmployeeFilter::default()
    };
    let matching = visible_employees(&employees, &filter);
    assert!(matching
        .iter()
        .all(|employee| employee.department == "Engineering"));

    let non_matching: Vec<_> = employees
        .iter()
        .filter(|employee| employee.department != "Engineering")
        .cloned()
        .collect();
    assert_eq!(matching.len() + non_matching.len(), employees.len());
    for employee in &employees {
        let in_matching = matching.iter().any(|m| m.id == employee.id);
        let in_rest = non_matching.iter().any(|m| m.id == employee.id);
        assert!(in_matching ^ in_rest, "each record lands in exactly one side");
    }
}

#[test]
fn search_matches_name_or_position_case_insensitively() {
    let store = seed::standard_store();
    let employees = store.employees.snapshot();

    let by_name = visible_employees(
        &employees,
        &EmployeeFilter {
            search: Some("JOHN".to_string()),
            ..EmployeeFilter::default()
        },
    );
    let names: Vec<&str> = by_name.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Michael Johnson"]);

    let by_position = visible_employees(
        &employees,
        &EmployeeFilter {
            search: Some("manager".to_string()),
            ..EmployeeFilter::default()
        },
    );
    let names: Vec<&str> = by_position.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Smith", "Emily Davis"]);
}

#[test]
fn employee_predicates_are_anded() {
    let store = seed::standard_store();
    let employees = store.employees.snapshot();

    let filter = EmployeeFilter {
        search: Some("specialist".to_string()),
        department: Some("Marketing".to_string()),
        status: Some(EmployeeStatus::OnLeave),
    };
    let visible = visible_employees(&employees, &filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "e003");

    let filter = EmployeeFilter {
        status: Some(EmployeeStatus::Active),
        ..filter
    };
    assert!(visible_employees(&employees, &filter).is_empty());
}

#[test]
fn announcements_sort_newest_first_with_stable_ties() {
    let mut announcements = vec![
        announcement("n1", date(2023, 6, 10), AnnouncementCategory::General),
        announcement("n2", date(2023, 6, 20), AnnouncementCategory::It),
        announcement("n3", date(2023, 6, 10), AnnouncementCategory::Event),
    ];
    announcements.push(announcement(
        "n4",
        date(2023, 6, 20),
        AnnouncementCategory::Policy,
    ));

    let visible = visible_announcements(&announcements, &AnnouncementFilter::default());
    let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
    // Same-date records keep their insertion order.
    assert_eq!(ids, vec!["n2", "n4", "n1", "n3"]);
}

#[test]
fn announcement_category_filter_applies_before_sorting() {
    let store = seed::standard_store();
    let announcements = store.announcements.snapshot();

    let visible = visible_announcements(
        &announcements,
        &AnnouncementFilter {
            category: Some(AnnouncementCategory::General),
        },
    );
    let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a004", "a005"]);
}

#[test]
fn job_filters_combine_status_and_department() {
    let store = seed::standard_store();
    let listings = store.job_listings.snapshot();

    let visible = visible_job_listings(
        &listings,
        &JobFilter {
            status: Some(JobStatus::Open),
            department: Some("Engineering".to_string()),
        },
    );
    let ids: Vec<&str> = visible.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["j001"]);

    let all_open = visible_job_listings(
        &listings,
        &JobFilter {
            status: Some(JobStatus::Open),
            department: None,
        },
    );
    let ids: Vec<&str> = all_open.iter().map(|j| j.id.as_str()).collect();
    // Posted-date descending.
    assert_eq!(ids, vec!["j003", "j002", "j001"]);
}

#[test]
fn empty_result_is_a_valid_projection() {
    let store = seed::standard_store();
    let listings = store.job_listings.snapshot();

    let visible = visible_job_listings(
        &listings,
        &JobFilter {
            status: Some(JobStatus::Closed),
            department: Some("Engineering".to_string()),
        },
    );
    assert!(visible.is_empty());
}

#[test]
fn groupings_ignore_the_primary_filter() {
    let store = seed::standard_store();
    let requests = store.leave_requests.snapshot();

    let groupings = leave_groupings(&requests);
    assert_eq!(groupings.all.len(), 5);
    assert_eq!(groupings.pending.len(), 2);
    assert_eq!(groupings.approved.len(), 2);
    assert_eq!(groupings.rejected.len(), 1);
    assert!(groupings
        .pending
        .iter()
        .all(|request| request.status == LeaveStatus::Pending));

    let job_groups = job_groupings(&store.job_listings.snapshot());
    assert_eq!(job_groups.open.len(), 3);
    assert_eq!(job_groups.on_hold.len(), 1);
    assert_eq!(job_groups.closed.len(), 1);
}

#[test]
fn groupings_show_newest_submissions_first() {
    let store = seed::standard_store();
    let mut requests = store.leave_requests.snapshot();
    requests.push(sick_leave_stub("x1", date(2023, 8, 1)));
    requests.push(sick_leave_stub("x2", date(2023, 8, 15)));

    let groupings = leave_groupings(&requests);
    let pending_ids: Vec<&str> = groupings.pending.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(pending_ids, vec!["x2", "x1", "l003", "l004"]);
    let all_ids: Vec<&str> = groupings.all.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        all_ids,
        vec!["x2", "x1", "l001", "l002", "l003", "l004", "l005"]
    );
}

#[test]
fn stamped_submissions_display_before_seed_history() {
    let store = seed::standard_store();
    let mut requests = store.leave_requests.snapshot();
    let mut early = sick_leave_stub("x1", date(2023, 8, 1));
    let late = sick_leave_stub("x2", date(2023, 8, 15));
    early.status = LeaveStatus::Pending;
    requests.push(early);
    requests.push(late);

    let visible = visible_leave_requests(&requests, &LeaveFilter::default());
    let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["x2", "x1", "l001", "l002", "l003", "l004", "l005"]);
}

fn sick_leave_stub(
    id: &str,
    submitted_on: chrono::NaiveDate,
) -> crate::portal::domain::LeaveRequest {
    crate::portal::domain::LeaveRequest {
        id: id.to_string(),
        employee_id: "e001".to_string(),
        employee_name: "John Doe".to_string(),
        leave_type: crate::portal::domain::LeaveType::Sick,
        status: LeaveStatus::Pending,
        start_date: submitted_on,
        end_date: submitted_on,
        reason: None,
        approver: None,
        approved_date: None,
        submitted_on: Some(submitted_on),
    }
}
