mod analyze;
mod exercises;
mod health;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route(
            "/api/analyze",
            post(analyze::analyze).fallback(fallback_handler),
        )
        .route(
            "/api/exercises",
            get(exercises::list_exercises).fallback(fallback_handler),
        );

    for path in ["/health", "/api/health"] {
        app = app.nest(path, health::router());
    }

    app.fallback(fallback_handler).with_state(state)
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found").into_response()
}
