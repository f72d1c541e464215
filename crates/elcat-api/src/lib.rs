//! # elcat-api — Axum Service for the Election Catalog
//!
//! Serves a read-only election catalog that is rebuilt from a directory of
//! JSON files on a fixed interval, plus the SVG asset bundle and static
//! files of the viewer.
//!
//! ## API Surface
//!
//! | Route                  | Module                  | Purpose                        |
//! |------------------------|-------------------------|--------------------------------|
//! | `GET /elections`       | [`routes::elections`]   | Current catalog                |
//! | `GET /election?id=`    | [`routes::elections`]   | Raw file for one election      |
//! | `GET /api/svgs?file=`  | [`routes::svgs`]        | SVG assets with placeholders   |
//! | `GET /openapi.json`    | [`openapi`]             | Generated OpenAPI spec         |
//! | `GET /health/*`        | this module             | Liveness and readiness probes  |
//! | anything else          | static directory        | Viewer files                   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsMiddleware → Handler
//! ```
//!
//! ## Concurrency
//!
//! Handlers reach the catalog through [`reader::CatalogReader`], which only
//! clones the current snapshot under the lock. The
//! [`refresh::RefreshScheduler`] scans on a blocking worker and swaps the
//! snapshot in a single write.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod reader;
pub mod refresh;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .merge(routes::elections::router())
        .merge(routes::svgs::router())
        .merge(openapi::router())
        .fallback_service(static_files)
        .layer(from_fn(middleware::cors::cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. Always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The first refresh completes before the listener binds.
async fn readiness() -> &'static str {
    "ready"
}
