//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Election Catalog API",
        description = "Read-only election catalog refreshed from a directory of JSON files, plus the SVG asset bundle used by the viewer.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::elections::list_elections,
        crate::routes::elections::get_election,
        crate::routes::svgs::get_svgs,
    ),
    components(schemas(
        elcat_core::Election,
        elcat_store::SvgAsset,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "elections", description = "Election catalog"),
        (name = "assets", description = "SVG asset bundle"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = spec["paths"].as_object().unwrap();
        for path in ["/elections", "/election", "/api/svgs"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}
