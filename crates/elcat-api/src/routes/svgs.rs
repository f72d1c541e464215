//! # SVG Asset Routes
//!
//! Routes:
//! - GET /api/svgs: every `*.svg` in the asset directory
//! - GET /api/svgs?file={name}&file={name}...: the named assets, in request order
//!
//! An asset that is missing, unreadable, or names an invalid path is
//! answered with a placeholder SVG in its slot. The request only fails if
//! the asset directory itself cannot be listed.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use elcat_store::SvgAsset;

use crate::error::AppError;
use crate::extractors::extract_query;
use crate::state::AppState;

/// Query parameter naming a requested asset. May repeat.
pub const FILE_PARAM: &str = "file";

/// Build the SVG router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/svgs", get(get_svgs))
}

/// GET /api/svgs: Fetch SVG assets.
#[utoipa::path(
    get,
    path = "/api/svgs",
    params(
        ("file" = Option<Vec<String>>, Query, description = "Asset name; `.svg` is appended when missing. Repeatable. Omit to list every asset."),
    ),
    responses(
        (status = 200, description = "Requested assets, placeholders for failures", body = [SvgAsset]),
        (status = 500, description = "Asset directory unreadable", body = crate::error::ErrorBody),
    ),
    tag = "assets"
)]
pub(crate) async fn get_svgs(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<SvgAsset>>, AppError> {
    let requested: Vec<String> = extract_query(query)?
        .into_iter()
        .filter(|(key, _)| key == FILE_PARAM)
        .map(|(_, value)| value)
        .collect();

    if requested.is_empty() {
        return Ok(Json(state.reader.list_assets().await?));
    }

    let mut assets = Vec::with_capacity(requested.len());
    for name in &requested {
        assets.push(state.reader.fetch_asset_or_placeholder(name).await);
    }
    Ok(Json(assets))
}
