use axum::Router;

pub fn create_test_app() -> Router {
    formcoach_backend_rust::create_app()
}
