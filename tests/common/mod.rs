#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use linkmint::routes::app_router;
use linkmint::state::AppState;
use std::path::Path;

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Full router, without static files.
pub fn create_test_app(state: AppState) -> Router {
    app_router(state, None)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}

pub fn create_static_server(state: AppState, dir: &Path) -> TestServer {
    TestServer::new(app_router(state, Some(dir))).unwrap()
}

/// Creates a mapping directly through the service and returns its code.
pub fn create_test_mapping(state: &AppState, long_url: &str) -> String {
    state
        .link_service
        .get_or_create_short(long_url)
        .into_inner()
}
