use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::{JobStatus, NewAnnouncement, NewEmployee, NewJobListing, NewLeaveRequest};
use super::service::{PortalService, ServiceError};
use super::store::{NotificationSink, StoreError};
use super::views::{AnnouncementFilter, EmployeeFilter, JobFilter, LeaveFilter};

/// Router builder exposing the portal operations over HTTP.
pub fn portal_router<N>(service: Arc<PortalService<N>>) -> Router
where
    N: NotificationSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_employees::<N>).post(add_employee::<N>),
        )
        .route(
            "/api/v1/leave",
            get(list_leave::<N>).post(submit_leave::<N>),
        )
        .route("/api/v1/leave/groupings", get(leave_groupings::<N>))
        .route("/api/v1/leave/:request_id/approve", put(approve_leave::<N>))
        .route("/api/v1/leave/:request_id/reject", put(reject_leave::<N>))
        .route(
            "/api/v1/announcements",
            get(list_announcements::<N>).post(post_announcement::<N>),
        )
        .route("/api/v1/jobs", get(list_jobs::<N>).post(post_job::<N>))
        .route("/api/v1/jobs/groupings", get(job_groupings::<N>))
        .route("/api/v1/jobs/:job_id/status", put(update_job_status::<N>))
        .route("/api/v1/dashboard", get(dashboard::<N>))
        .with_state(service)
}

/// The UI's filter selects send `all` as an explicit sentinel; treat it the
/// same as an absent parameter, and reject values outside the enum.
fn choice<T: DeserializeOwned>(raw: Option<String>, field: &str) -> Result<Option<T>, Response> {
    match raw.as_deref() {
        None | Some("all") | Some("") => Ok(None),
        Some(value) => serde_json::from_value(Value::String(value.to_string()))
            .map(Some)
            .map_err(|_| {
                let payload = json!({
                    "error": format!("unrecognized {field} '{value}'"),
                });
                (StatusCode::BAD_REQUEST, Json(payload)).into_response()
            }),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        ServiceError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,
        ServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
        ServiceError::UnknownEmployee(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmployeeQuery {
    search: Option<String>,
    department: Option<String>,
    status: Option<String>,
}

async fn list_employees<N>(
    State(service): State<Arc<PortalService<N>>>,
    Query(query): Query<EmployeeQuery>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let status = match choice(query.status, "status") {
        Ok(status) => status,
        Err(response) => return response,
    };
    let filter = EmployeeFilter {
        search: query.search,
        department: query
            .department
            .filter(|value| value != "all" && !value.is_empty()),
        status,
    };
    (StatusCode::OK, Json(service.employees(&filter))).into_response()
}

async fn add_employee<N>(
    State(service): State<Arc<PortalService<N>>>,
    Json(employee): Json<NewEmployee>,
) -> Response
where
    N: NotificationSink + 'static,
{
    match service.add_employee(employee) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeaveQuery {
    status: Option<String>,
}

async fn list_leave<N>(
    State(service): State<Arc<PortalService<N>>>,
    Query(query): Query<LeaveQuery>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let status = match choice(query.status, "status") {
        Ok(status) => status,
        Err(response) => return response,
    };
    let filter = LeaveFilter { status };
    (StatusCode::OK, Json(service.leave_requests(&filter))).into_response()
}

async fn leave_groupings<N>(State(service): State<Arc<PortalService<N>>>) -> Response
where
    N: NotificationSink + 'static,
{
    (StatusCode::OK, Json(service.leave_groupings())).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitLeaveBody {
    #[serde(flatten)]
    request: NewLeaveRequest,
    /// Defaults to today; tests supply it for determinism.
    #[serde(default)]
    submitted_on: Option<NaiveDate>,
}

async fn submit_leave<N>(
    State(service): State<Arc<PortalService<N>>>,
    Json(body): Json<SubmitLeaveBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let today = body
        .submitted_on
        .unwrap_or_else(|| Local::now().date_naive());
    match service.submit_leave_request(body.request, today) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DecisionBody {
    approver: String,
    #[serde(default)]
    decided_on: Option<NaiveDate>,
}

async fn approve_leave<N>(
    State(service): State<Arc<PortalService<N>>>,
    Path(request_id): Path<String>,
    Json(body): Json<DecisionBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let now = body.decided_on.unwrap_or_else(|| Local::now().date_naive());
    match service.approve_leave(&request_id, &body.approver, now) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn reject_leave<N>(
    State(service): State<Arc<PortalService<N>>>,
    Path(request_id): Path<String>,
    Json(body): Json<DecisionBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let now = body.decided_on.unwrap_or_else(|| Local::now().date_naive());
    match service.reject_leave(&request_id, &body.approver, now) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnnouncementQuery {
    category: Option<String>,
}

async fn list_announcements<N>(
    State(service): State<Arc<PortalService<N>>>,
    Query(query): Query<AnnouncementQuery>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let category = match choice(query.category, "category") {
        Ok(category) => category,
        Err(response) => return response,
    };
    let filter = AnnouncementFilter { category };
    (StatusCode::OK, Json(service.announcements(&filter))).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostAnnouncementBody {
    #[serde(flatten)]
    announcement: NewAnnouncement,
    #[serde(default)]
    posted_on: Option<NaiveDate>,
}

async fn post_announcement<N>(
    State(service): State<Arc<PortalService<N>>>,
    Json(body): Json<PostAnnouncementBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let today = body.posted_on.unwrap_or_else(|| Local::now().date_naive());
    match service.post_announcement(body.announcement, today) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobQuery {
    status: Option<String>,
    department: Option<String>,
}

async fn list_jobs<N>(
    State(service): State<Arc<PortalService<N>>>,
    Query(query): Query<JobQuery>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let status = match choice(query.status, "status") {
        Ok(status) => status,
        Err(response) => return response,
    };
    let filter = JobFilter {
        status,
        department: query
            .department
            .filter(|value| value != "all" && !value.is_empty()),
    };
    (StatusCode::OK, Json(service.job_listings(&filter))).into_response()
}

async fn job_groupings<N>(State(service): State<Arc<PortalService<N>>>) -> Response
where
    N: NotificationSink + 'static,
{
    (StatusCode::OK, Json(service.job_groupings())).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostJobBody {
    #[serde(flatten)]
    listing: NewJobListing,
    #[serde(default)]
    posted_on: Option<NaiveDate>,
}

async fn post_job<N>(
    State(service): State<Arc<PortalService<N>>>,
    Json(body): Json<PostJobBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    let today = body.posted_on.unwrap_or_else(|| Local::now().date_naive());
    match service.post_job(body.listing, today) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobStatusBody {
    status: JobStatus,
}

async fn update_job_status<N>(
    State(service): State<Arc<PortalService<N>>>,
    Path(job_id): Path<String>,
    Json(body): Json<JobStatusBody>,
) -> Response
where
    N: NotificationSink + 'static,
{
    match service.update_job_status(&job_id, body.status) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn dashboard<N>(State(service): State<Arc<PortalService<N>>>) -> Response
where
    N: NotificationSink + 'static,
{
    (StatusCode::OK, Json(service.dashboard())).into_response()
}
