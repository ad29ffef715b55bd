//! JSON API endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::AppState;
use super::helpers::{json_error, parse_start, StartParam, StartParams, LOAD_FAILED_MESSAGE};

/// Dataset bounds and record count.
pub async fn api_coverage(State(state): State<AppState>) -> Response {
    let Some(gallery) = state.gallery.as_deref() else {
        return json_error(StatusCode::SERVICE_UNAVAILABLE, LOAD_FAILED_MESSAGE);
    };

    Json(serde_json::json!({
        "min": gallery.coverage().min(),
        "max": gallery.coverage().max(),
        "records": gallery.len(),
    }))
    .into_response()
}

/// Materialized window for `?start=`, clamped to coverage.
pub async fn api_window(
    State(state): State<AppState>,
    Query(params): Query<StartParams>,
) -> Response {
    let Some(gallery) = state.gallery.as_deref() else {
        return json_error(StatusCode::SERVICE_UNAVAILABLE, LOAD_FAILED_MESSAGE);
    };

    let start = parse_start(params.start.as_deref());
    if let StartParam::Invalid(value) = &start {
        return json_error(
            StatusCode::BAD_REQUEST,
            &format!("Invalid start date '{}'; expected YYYY-MM-DD", value),
        );
    }

    match gallery.view(start.day()) {
        Ok(view) => Json(view.summary(&state.fallback_image)).into_response(),
        Err(e) => json_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}
