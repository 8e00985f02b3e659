// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity rating routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::ActivityRating;
use crate::time_utils::parse_day;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Rating routes (require authentication via JWT).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/rating/activity/today", get(activity_rating_today))
        .route("/api/rating/activity/date/{date}", get(activity_rating_on))
}

/// Rate the caller's activities for the current day.
async fn activity_rating_today(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ActivityRating>> {
    let today = state.today();
    let rating = state.activity_service.rate_day(&user.user_id, today).await?;
    Ok(Json(rating))
}

/// Rate the caller's activities for a given day (`YYYY-MM-DD`).
async fn activity_rating_on(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(date): Path<String>,
) -> Result<Json<ActivityRating>> {
    let day = parse_day(&date)?;
    let rating = state.activity_service.rate_day(&user.user_id, day).await?;
    Ok(Json(rating))
}
