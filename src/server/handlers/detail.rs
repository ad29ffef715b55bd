//! Single-day detail page handler.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::{DayTemplate, DetailContent};
use super::super::AppState;
use super::helpers::{error_page, unavailable_page};
use crate::dates::DayKey;
use crate::gallery::Gallery;

/// Detail page for one day, the no-script counterpart of the modal.
pub async fn day_detail(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let Some(gallery) = state.gallery.as_deref() else {
        return unavailable_page();
    };

    let Ok(day) = DayKey::parse(&date) else {
        return error_page(
            StatusCode::NOT_FOUND,
            "Not found",
            &format!("'{}' is not a valid date.", date),
        );
    };
    let Some(record) = gallery.record(day) else {
        return error_page(
            StatusCode::NOT_FOUND,
            "Not found",
            &format!("No APOD entry for {} in the mirror feed.", day),
        );
    };

    let (has_prev, prev_key) = DayTemplate::neighbour(neighbour(gallery, day, false));
    let (has_next, next_key) = DayTemplate::neighbour(neighbour(gallery, day, true));

    let template = DayTemplate {
        title: record.detail_title(),
        detail: DetailContent::from_record(record, &state.fallback_image),
        gallery_link: format!("/gallery?start={}", gallery.coverage().clamp_start(day)),
        has_prev,
        prev_key,
        has_next,
        next_key,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
    .into_response()
}

/// Closest day before (`forward == false`) or after `day` that has a record.
fn neighbour(gallery: &Gallery, day: DayKey, forward: bool) -> Option<DayKey> {
    let records = gallery.records();
    if forward {
        records.iter().map(|r| r.date).find(|date| *date > day)
    } else {
        records.iter().rev().map(|r| r.date).find(|date| *date < day)
    }
}
