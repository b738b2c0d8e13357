use crate::infra::RecordingNotificationSink;
use chrono::{Local, NaiveDate};
use clap::Args;
use hr_portal::error::AppError;
use hr_portal::portal::{
    seed, EmployeeFilter, LeaveType, NewLeaveRequest, NotificationSink, PortalService,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Employee submitting the demo leave request (defaults to the first
    /// seeded employee).
    #[arg(long)]
    pub(crate) employee: Option<String>,
    /// First day of the demo leave request (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) leave_start: Option<NaiveDate>,
    /// Last day of the demo leave request (YYYY-MM-DD). Defaults to
    /// leave_start + 4 days.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) leave_end: Option<NaiveDate>,
    /// Override "today" for submission and decision stamps.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        employee,
        leave_start,
        leave_end,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let leave_start = leave_start.unwrap_or(today);
    let leave_end = leave_end.unwrap_or(leave_start + chrono::Duration::days(4));

    let sink = Arc::new(RecordingNotificationSink::default());
    let service = PortalService::new(
        seed::standard_store(),
        sink.clone(),
        seed::standard_breakdowns(),
    );

    let employee_id = employee.unwrap_or_else(|| {
        service
            .employees(&EmployeeFilter::default())
            .first()
            .map(|employee| employee.id.clone())
            .unwrap_or_default()
    });

    println!("HR portal demo ({today})");
    render_dashboard(&service);

    println!("\nSubmitting annual leave for {employee_id} ({leave_start} to {leave_end})");
    let request = service.submit_leave_request(
        NewLeaveRequest {
            employee_id: employee_id.clone(),
            leave_type: LeaveType::Annual,
            start_date: leave_start,
            end_date: leave_end,
            reason: Some("Demo walkthrough".to_string()),
        },
        today,
    )?;
    println!(
        "- created {} for {} ({})",
        request.id,
        request.employee_name,
        request.status.label()
    );

    let approved = service.approve_leave(&request.id, "HR Manager", today)?;
    println!(
        "- {} decided by {} on {}",
        approved.status.label(),
        approved.approver.as_deref().unwrap_or("?"),
        approved
            .approved_date
            .map(|date| date.to_string())
            .unwrap_or_default()
    );

    let groupings = service.leave_groupings();
    println!(
        "\nLeave queue: {} total | {} pending | {} approved | {} rejected",
        groupings.all.len(),
        groupings.pending.len(),
        groupings.approved.len(),
        groupings.rejected.len()
    );

    println!("\nDashboard after the cycle");
    render_dashboard(&service);

    println!("\nNotifications emitted:");
    for event in sink.events() {
        println!("  - [{}] {}: {}", event.kind.label(), event.subject_id, event.message);
    }

    Ok(())
}

fn render_dashboard<N: NotificationSink + 'static>(service: &PortalService<N>) {
    let stats = service.dashboard();
    println!(
        "- {} employees ({} active, {} on leave) | {} pending leave requests | {} open positions",
        stats.total_employees,
        stats.active_employees,
        stats.on_leave_employees,
        stats.pending_leave_requests,
        stats.open_positions
    );
    for announcement in &stats.recent_announcements {
        println!(
            "- recent: {} ({}, {})",
            announcement.title,
            announcement.category.label(),
            announcement.date
        );
    }
}
