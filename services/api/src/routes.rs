use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use hr_portal::portal::{portal_router, NotificationSink, PortalService};

/// Portal endpoints plus the operational routes every deployment carries.
pub(crate) fn with_portal_routes<N>(service: Arc<PortalService<N>>) -> axum::Router
where
    N: NotificationSink + 'static,
{
    portal_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::RecordingNotificationSink;
    use axum::body::Body;
    use axum::http::Request;
    use hr_portal::portal::seed;
    use tower::ServiceExt;

    fn seeded_routes() -> axum::Router {
        let service = Arc::new(PortalService::new(
            seed::standard_store(),
            Arc::new(RecordingNotificationSink::default()),
            seed::standard_breakdowns(),
        ));
        with_portal_routes(service)
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = seeded_routes()
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn portal_routes_are_mounted() {
        let response = seeded_routes()
            .oneshot(
                Request::get("/api/v1/dashboard")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
