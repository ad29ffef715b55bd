//! Gallery page handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::{CardRow, GalleryTemplate};
use super::super::AppState;
use super::helpers::{
    error_page, invalid_start_notice, parse_start, unavailable_page, StartParam, StartParams,
};
use crate::facts::fact_line;
use crate::gallery::coverage_note;

const PAGE_TITLE: &str = "Astronomy Picture of the Day";

/// Nine-day gallery page, served at `/` and `/gallery?start=YYYY-MM-DD`.
pub async fn gallery_page(
    State(state): State<AppState>,
    Query(params): Query<StartParams>,
) -> Response {
    let Some(gallery) = state.gallery.as_deref() else {
        return unavailable_page();
    };

    let start = parse_start(params.start.as_deref());
    let view = match gallery.view(start.day()) {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!("Failed to build window: {}", e);
            return error_page(StatusCode::INTERNAL_SERVER_ERROR, PAGE_TITLE, &e.to_string());
        }
    };

    let (has_notice, notice) = match &start {
        StartParam::Invalid(value) => (true, invalid_start_notice(value)),
        _ => (false, String::new()),
    };
    let (has_hint, hint) = match start {
        StartParam::Valid(_) => (false, String::new()),
        _ => (true, coverage_note(gallery.coverage())),
    };

    let cards: Vec<CardRow> = view
        .slots()
        .iter()
        .map(|slot| CardRow::from_slot(slot, &state.fallback_image))
        .collect();

    let template = GalleryTemplate {
        title: PAGE_TITLE,
        fact: fact_line(),
        min_date: gallery.coverage().min().to_string(),
        max_date: gallery.coverage().max().to_string(),
        start_value: view.window().start().to_string(),
        end_value: view.window().end().to_string(),
        cards,
        status_note: view.status_note(),
        has_hint,
        hint,
        has_notice,
        notice,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
    .into_response()
}
