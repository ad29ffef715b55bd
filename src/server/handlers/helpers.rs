//! Helper types and utility functions for handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::super::template_structs::ErrorTemplate;
use crate::dates::DayKey;

/// Message shown when the feed could not be loaded at startup.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load APOD data. Please refresh.";

/// Query params carrying an optional window start.
#[derive(Debug, Default, Deserialize)]
pub struct StartParams {
    pub start: Option<String>,
}

/// Outcome of reading the `start` query parameter.
#[derive(Debug, PartialEq, Eq)]
pub enum StartParam {
    /// No start given; show the most recent days.
    Absent,
    Valid(DayKey),
    Invalid(String),
}

impl StartParam {
    pub fn day(&self) -> Option<DayKey> {
        match self {
            StartParam::Valid(day) => Some(*day),
            _ => None,
        }
    }
}

/// Parse the start parameter. Empty input counts as absent.
pub fn parse_start(raw: Option<&str>) -> StartParam {
    match raw.map(str::trim) {
        None | Some("") => StartParam::Absent,
        Some(value) => match DayKey::parse(value) {
            Ok(day) => StartParam::Valid(day),
            Err(_) => StartParam::Invalid(value.to_string()),
        },
    }
}

/// Notice shown when an unparseable start date was ignored.
pub fn invalid_start_notice(value: &str) -> String {
    format!(
        "Ignoring invalid start date '{}'; showing the most recent days.",
        value
    )
}

/// Render the error page with the given status.
pub fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    let template = ErrorTemplate { title, message };
    let html = template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));
    (status, Html(html)).into_response()
}

/// Response used by every page while no gallery is loaded.
pub fn unavailable_page() -> Response {
    error_page(
        StatusCode::SERVICE_UNAVAILABLE,
        "Astronomy Picture of the Day",
        LOAD_FAILED_MESSAGE,
    )
}

/// JSON error body with the given status.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
