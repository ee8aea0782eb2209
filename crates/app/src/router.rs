use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::{lookup, telemetry};

#[derive(Clone)]
pub struct AppState {
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// `None` disables the `/metrics` route.
    pub fn new(metrics: Option<PrometheusHandle>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}

pub fn app_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/dict", get(lookup::list_dictionaries))
        .route("/api/dict/:name", get(lookup::dictionary))
        .route("/api/lookup/status", get(lookup::status))
        .route("/api/lookup/type", get(lookup::type_label))
        .route("/api/lookup/level", get(lookup::level));

    if state.metrics().is_some() {
        router = router.route("/metrics", get(metrics));
    }

    router.with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> Response {
    let Some(handle) = state.metrics() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let body = telemetry::render_metrics(handle);
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    pub(crate) fn setup_state() -> AppState {
        let metrics = telemetry::init_metrics().expect("metrics init");
        AppState::new(Some(metrics))
    }

    pub(crate) async fn get_body(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("handler should respond");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let collected = response
            .into_body()
            .collect()
            .await
            .expect("body should read");
        let body = String::from_utf8(collected.to_bytes().to_vec()).expect("utf-8");
        (status, content_type, body)
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let (status, _, _) = get_body(app_router(setup_state()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_exports_build_info() {
        let (status, _, body) = get_body(app_router(setup_state()), "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("app_build_info"));
        assert!(body.contains("app_uptime_seconds"));
    }

    fn has_series(body: &str, name: &str, labels: &[&str]) -> bool {
        body.lines()
            .filter(|line| line.starts_with(name))
            .any(|line| labels.iter().all(|label| line.contains(label)))
    }

    #[tokio::test]
    async fn metrics_count_lookups_by_outcome() {
        let state = setup_state();
        for uri in [
            "/api/lookup/status?category=assessment&code=1",
            "/api/lookup/status?category=assessment&code=9",
            "/api/lookup/status?category=evaluation&code=1",
            "/api/dict/assessment-type",
        ] {
            get_body(app_router(state.clone()), uri).await;
        }

        let (status, _, body) = get_body(app_router(state), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(has_series(
            &body,
            "lookup_requests_total",
            &[r#"kind="status""#, r#"outcome="hit""#]
        ));
        assert!(has_series(
            &body,
            "lookup_requests_total",
            &[r#"kind="status""#, r#"outcome="fallback""#]
        ));
        assert!(has_series(
            &body,
            "lookup_rejected_total",
            &[r#"reason="category""#]
        ));
        assert!(has_series(
            &body,
            "dict_requests_total",
            &[r#"dictionary="assessment-type""#]
        ));
    }

    #[tokio::test]
    async fn metrics_route_is_absent_when_disabled() {
        let (status, _, _) = get_body(app_router(AppState::new(None)), "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
