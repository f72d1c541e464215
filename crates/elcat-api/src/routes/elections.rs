//! # Election Catalog Routes
//!
//! Routes:
//! - GET /elections: every election in the current snapshot
//! - GET /election?id={electionUId}: raw bytes of one election's file

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::extractors::{extract_query, require_param};
use crate::state::AppState;

/// Query parameter naming the election to fetch. Only the first occurrence counts.
pub const ID_PARAM: &str = "id";

/// Build the elections router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/elections", get(list_elections))
        .route("/election", get(get_election))
}

/// GET /elections: List the current catalog.
#[utoipa::path(
    get,
    path = "/elections",
    responses(
        (status = 200, description = "Current catalog snapshot", body = [elcat_core::Election]),
    ),
    tag = "elections"
)]
pub(crate) async fn list_elections(State(state): State<AppState>) -> Response {
    let snapshot = state.reader.list_catalog();
    Json(snapshot.records()).into_response()
}

/// GET /election?id=: Return one election file byte for byte.
#[utoipa::path(
    get,
    path = "/election",
    params(
        ("id" = String, Query, description = "Identifier (`electionUId`) of the election to fetch. Later repeats are ignored."),
    ),
    responses(
        (status = 200, description = "Backing file, unmodified (application/json)"),
        (status = 400, description = "Missing id", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorBody),
        (status = 500, description = "Backing file unreadable", body = crate::error::ErrorBody),
    ),
    tag = "elections"
)]
pub(crate) async fn get_election(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let first = extract_query(query)?
        .into_iter()
        .find(|(key, _)| key == ID_PARAM)
        .map(|(_, value)| value);
    let id = require_param(first, "electionUId")?;
    let bytes = state.reader.fetch_raw(&id).await?;
    Ok(([(CONTENT_TYPE, "application/json")], bytes).into_response())
}
