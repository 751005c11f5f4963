use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/info", get(info))
        .route("/live", get(live))
        .route("/metrics/prometheus", get(metrics_prometheus))
}

async fn root() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": now_iso(),
    }))
    .into_response()
}

async fn info(State(state): State<AppState>) -> Response {
    let response = HealthInfoResponse {
        service: "formcoach-backend",
        version: std::env::var("APP_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        environment: std::env::var("APP_ENV")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "development".to_string()),
        start_time: system_time_iso(state.started_at_system()),
        uptime: state.uptime_seconds(),
    };

    Json(response).into_response()
}

async fn live(State(state): State<AppState>) -> Response {
    let process_healthy = std::process::id() > 0;

    let response = LivenessResponse {
        status: if process_healthy {
            "healthy"
        } else {
            "unhealthy"
        },
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
        checks: LivenessChecks {
            process: process_healthy,
        },
    };

    Json(response).into_response()
}

async fn metrics_prometheus(State(state): State<AppState>) -> Response {
    let mut lines: Vec<String> = Vec::new();

    add_metric(
        &mut lines,
        "process_uptime_seconds",
        "Process uptime in seconds",
        "gauge",
        state.uptime_seconds() as f64,
    );
    add_metric(
        &mut lines,
        "analyses_total",
        "Total pose analyses served",
        "counter",
        state.counters().analyses_total() as f64,
    );

    let body = lines.join("\n");
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

fn add_metric(lines: &mut Vec<String>, name: &str, help: &str, metric_type: &str, value: f64) {
    lines.push(format!("# HELP {name} {help}"));
    lines.push(format!("# TYPE {name} {metric_type}"));
    lines.push(format!("{name} {value}"));
}

fn system_time_iso(time: std::time::SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Utc> = time.into();
    datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthInfoResponse {
    service: &'static str,
    version: String,
    environment: String,
    start_time: String,
    uptime: u64,
}

#[derive(Serialize)]
struct LivenessResponse {
    status: &'static str,
    timestamp: String,
    uptime: u64,
    checks: LivenessChecks,
}

#[derive(Serialize)]
struct LivenessChecks {
    process: bool,
}
