//! # Query Extraction Helpers
//!
//! Handlers take `Result<Query<T>, QueryRejection>` and run it through
//! [`extract_query`] so a malformed query string produces the standard JSON
//! error body instead of Axum's plain-text rejection.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

use crate::error::AppError;

/// Extract query parameters, mapping decode errors to [`AppError::BadRequest`].
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Return a required, non-empty query value or a `BadRequest` naming it.
pub fn require_param(value: Option<String>, what: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("missing {what}"))),
    }
}
