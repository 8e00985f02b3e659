// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! Every request here is rejected before the store is touched, so the
//! offline database never turns them into a 500.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;

mod common;

async fn authed_get(uri: &str) -> Response {
    let (app, _) = common::create_test_app();
    let token = common::test_token("user-1");

    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn authed_send(method: &str, uri: &str, body: &str) -> Response {
    let (app, _) = common::create_test_app();
    let token = common::test_token("user-1");

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_invalid_date_format() {
    for uri in [
        "/api/rating/activity/date/invalid-date",
        "/api/activities/date/24-05-2024",
        "/api/nutrition/date/2024-02-30",
        "/api/interest/date/Fri%20May%2024%202019",
    ] {
        let response = authed_get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri = {}", uri);
    }
}

#[tokio::test]
async fn test_reversed_date_range() {
    for uri in [
        "/api/activities/date/from/2024-05-24/to/2024-05-01",
        "/api/lifeparam/date/from/2024-05-24/to/2024-05-23",
    ] {
        let response = authed_get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri = {}", uri);
    }
}

#[tokio::test]
async fn test_unknown_exercise_filters() {
    let (app, _) = common::create_test_app();

    for uri in [
        "/api/exercises/type/rowing",
        "/api/exercises/pmg/tail",
        "/api/exercises/intensity/extreme",
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri = {}", uri);
    }
}

#[tokio::test]
async fn test_create_exercise_missing_fields() {
    let response = authed_send(
        "POST",
        "/api/exercises",
        r#"{"exercise_type": "cardio", "primary_muscle_group": "quad", "intensity": "high"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = authed_send("POST", "/api/exercises", r#"{"name": "sprints"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_exercise_name_too_long() {
    let body = format!(
        r#"{{"name": "{}", "exercise_type": "cardio",
            "primary_muscle_group": "quad", "intensity": "high"}}"#,
        "a".repeat(101)
    );

    let response = authed_send("POST", "/api/exercises", &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_activity_measures() {
    let response = authed_send(
        "POST",
        "/api/activities",
        r#"{"exercise_id": "run", "distance": -5.0}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = authed_send("PATCH", "/api/activities/id/a1", r#"{"weight": -1.0}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activity_requires_exercise() {
    let response = authed_send("POST", "/api/activities", r#"{"duration": 30.0}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lifeparam_sleep_out_of_range() {
    let response = authed_send(
        "POST",
        "/api/lifeparam",
        r#"{"sleep": 30.0, "office_productivity": "high", "stress": "low"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_shape() {
    let response = authed_get("/api/rating/activity/date/not-a-day").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "bad_request");
    assert!(body["details"].as_str().unwrap().contains("not-a-day"));
}
