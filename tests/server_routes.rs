//! Web server route tests.

use apodview::config::Settings;
use apodview::dates::DayKey;
use apodview::gallery::Gallery;
use apodview::models::{FeedRecord, MediaType};
use apodview::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

fn record(date: &str, media_type: MediaType, url: &str) -> FeedRecord {
    FeedRecord {
        date: DayKey::parse(date).unwrap(),
        title: Some(format!("Entry {}", date)),
        explanation: Some("A view of the night sky.".to_string()),
        media_type,
        url: url.to_string(),
        hdurl: None,
    }
}

/// Ten days of June 2024 with the 5th missing and a video on the 7th.
fn june_gallery() -> Gallery {
    let mut records = Vec::new();
    for day in 1..=11 {
        if day == 5 {
            continue;
        }
        let date = format!("2024-06-{:02}", day);
        if day == 7 {
            records.push(record(
                &date,
                MediaType::Video,
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            ));
        } else {
            let url = format!("https://apod.nasa.gov/apod/image/{}.jpg", date);
            records.push(record(&date, MediaType::Image, &url));
        }
    }
    Gallery::from_records(records).unwrap()
}

fn app() -> Router {
    create_router(AppState::new(june_gallery(), &Settings::default()))
}

fn unavailable_app() -> Router {
    create_router(AppState::unavailable(&Settings::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn load_failure_is_reported_on_every_page() {
    let (status, body) = get(unavailable_app(), "/").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("Could not load APOD data. Please refresh."));
    assert!(!body.contains("gallery-item"));

    let (status, _) = get(unavailable_app(), "/day/2024-06-01").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, json) = get_json(unavailable_app(), "/api/window").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Could not load APOD data. Please refresh.");
}

#[tokio::test]
async fn gallery_renders_video_thumbnail_and_placeholder() {
    let (status, body) = get(app(), "/gallery?start=2024-06-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"gallery-item").count(), 9);
    assert_eq!(body.matches("No APOD entry in mirror feed").count(), 1);
    assert!(body.contains("img.youtube.com"));
    assert!(body.contains("dQw4w9WgXcQ"));
    assert!(body.contains("Watch on YouTube"));
    assert!(body.contains("June 7, 2024"));
    assert!(!body.contains("class=\"hint\""));
}

#[tokio::test]
async fn invalid_start_falls_back_with_notice() {
    let (status, body) = get(app(), "/gallery?start=not-a-date").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ignoring invalid start date"));
    assert!(body.contains("value=\"2024-06-03\""));
    assert!(body.contains("value=\"2024-06-11\""));
}

#[tokio::test]
async fn empty_start_shows_default_window_with_hint() {
    let (status, body) = get(app(), "/gallery?start=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"2024-06-03\""));
    assert!(body.contains("class=\"hint\""));
    assert!(!body.contains("Ignoring invalid start date"));
}

#[tokio::test]
async fn api_window_clamps_requested_start() {
    let (status, json) = get_json(app(), "/api/window?start=2024-06-10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["start"], "2024-06-03");
    assert_eq!(json["end"], "2024-06-11");
    assert_eq!(json["requested"], "2024-06-10");
    assert_eq!(json["clamped"], true);
    assert_eq!(json["missing"], 1);

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 9);
    assert_eq!(days[2]["date"], "2024-06-05");
    assert!(days[2]["record"].is_null());
}

#[tokio::test]
async fn api_window_rejects_invalid_start() {
    let (status, json) = get_json(app(), "/api/window?start=2024-02-30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("2024-02-30"));
}

#[tokio::test]
async fn api_coverage_reports_bounds() {
    let (status, json) = get_json(app(), "/api/coverage").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["min"], "2024-06-01");
    assert_eq!(json["max"], "2024-06-11");
    assert_eq!(json["records"], 10);
}

#[tokio::test]
async fn day_detail_page() {
    let (status, body) = get(app(), "/day/2024-06-04").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Entry 2024-06-04"));
    assert!(body.contains("June 4, 2024"));
    assert!(body.contains("rel=\"prev\""));
    assert!(body.contains("rel=\"next\""));

    let (status, body) = get(app(), "/day/2024-06-11").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("rel=\"next\""));
}

#[tokio::test]
async fn day_detail_not_found() {
    let (status, _) = get(app(), "/day/2024-06-05").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app(), "/day/yesterday").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
