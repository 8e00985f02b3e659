// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication tests.
//!
//! Tokens are issued by the account service, so these tests pin down the
//! claim format the middleware accepts: HS256 with `{sub, exp, iat}` and
//! a string user ID in `sub`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use health_tracker::middleware::auth::{create_jwt, Claims};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

mod common;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

#[test]
fn test_jwt_roundtrip() {
    let signing_key = b"test_signing_key_32_bytes_long!!";

    let token = create_jwt("5f2b7c1e-user", signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, "5f2b7c1e-user");
    assert!(token_data.claims.iat > 0);
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_jwt_expiration_is_future() {
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let token = create_jwt("user-1", signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    assert!(
        token_data.claims.exp > now() + 86400 * 29,
        "Token expiration should be ~30 days in the future"
    );
}

fn signed(claims: &Claims) -> String {
    let key = health_tracker::config::Config::test_default().jwt_signing_key;
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(&key),
    )
    .unwrap()
}

async fn status_with_token(token: &str) -> StatusCode {
    let (app, _) = common::create_test_app();

    app.oneshot(
        Request::builder()
            .method("GET")
            .uri("/api/rating/activity/today")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
    .status()
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let token = signed(&Claims {
        sub: "user-1".to_string(),
        iat: now() - 86400 * 2,
        exp: now() - 86400,
    });

    assert_eq!(status_with_token(&token).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_subject_rejected() {
    let token = signed(&Claims {
        sub: "   ".to_string(),
        iat: now(),
        exp: now() + 3600,
    });

    assert_eq!(status_with_token(&token).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_externally_issued_token_accepted() {
    let token = signed(&Claims {
        sub: "user-from-account-service".to_string(),
        iat: now(),
        exp: now() + 3600,
    });

    // Auth passes; the offline store then fails.
    assert_eq!(
        status_with_token(&token).await,
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
