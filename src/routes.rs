//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`           - Health check
//! - `POST /short`            - Create or fetch a short code
//! - `GET  /retrieveLongUrl`  - Resolve a code to its long URL (JSON)
//! - `GET  /{short_url}`      - Short link redirect
//! - everything else          - Static frontend files, when configured
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - optional frontend directory. `/` maps to its `index.html`
///   and multi-segment paths map to files beneath it. A single-segment path is
///   tried as a short code first and served from the directory on a miss.
pub fn app_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let static_files = static_dir.map(ServeDir::new);

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .with_state(state.with_static_files(static_files.clone()));

    let router = match static_files {
        Some(files) => router.fallback_service(files),
        None => router,
    };

    router.layer(cors::layer()).layer(tracing::layer())
}
