// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, response::IntoResponse};
use health_tracker::error::AppError;
use health_tracker::models::{ExerciseType, UnknownValue};

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED, "unauthorized"),
        (AppError::InvalidToken, StatusCode::UNAUTHORIZED, "invalid_token"),
        (
            AppError::NotFound("Activity not found".to_string()),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
        (
            AppError::BadRequest("Exercise already exists".to_string()),
            StatusCode::BAD_REQUEST,
            "bad_request",
        ),
        (
            AppError::Database("connection reset".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
            "database_error",
        ),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
        ),
    ];

    for (err, status, code) in cases {
        let (actual, body) = body_json(err).await;
        assert_eq!(actual, status);
        assert_eq!(body["error"], code);
    }
}

#[tokio::test]
async fn test_database_details_withheld() {
    let (_, body) = body_json(AppError::Database("secret connection string".to_string())).await;
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_unknown_value_is_bad_request() {
    let err: AppError = "rowing".parse::<ExerciseType>().unwrap_err().into();
    let (status, body) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Unknown exercise type: rowing");

    let direct: AppError = UnknownValue::new("intensity", "extreme").into();
    assert!(matches!(direct, AppError::BadRequest(_)));
}
