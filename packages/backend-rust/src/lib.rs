#![allow(dead_code)]

pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn create_app() -> axum::Router {
    let state = AppState::new();

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
