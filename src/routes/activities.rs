// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity log routes for authenticated users.

use crate::db::new_document_id;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Activity, PopulatedActivity};
use crate::time_utils::{format_utc_rfc3339, parse_day, parse_day_range};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Activity routes (require authentication via JWT).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(create_activity))
        .route("/api/activities/today", get(activities_today))
        .route("/api/activities/date/{date}", get(activities_on))
        .route(
            "/api/activities/date/from/{from}/to/{to}",
            get(activities_between),
        )
        .route(
            "/api/activities/id/{id}",
            patch(update_activity).delete(delete_activity),
        )
}

// ─── Requests ────────────────────────────────────────────────

/// Body for logging an activity.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Exercise is required"))]
    pub exercise_id: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub duration: Option<f64>,
    pub reps: Option<u32>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    pub laps: Option<u32>,
    pub sets: Option<u32>,
}

/// Body for a partial activity update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateActivityRequest {
    #[validate(length(min = 1))]
    pub exercise_id: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub duration: Option<f64>,
    pub reps: Option<u32>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance: Option<f64>,
    pub laps: Option<u32>,
    pub sets: Option<u32>,
}

impl CreateActivityRequest {
    fn into_activity(self, id: String, user_id: String, today: NaiveDate) -> Activity {
        Activity {
            id,
            user_id,
            exercise_id: self.exercise_id,
            date: self.date.unwrap_or(today),
            duration: self.duration,
            reps: self.reps,
            weight: self.weight,
            distance: self.distance,
            laps: self.laps,
            sets: self.sets,
            logged_at: format_utc_rfc3339(Utc::now()),
        }
    }
}

impl UpdateActivityRequest {
    /// Copy every present field onto `activity`.
    pub fn apply(self, activity: &mut Activity) {
        if let Some(exercise_id) = self.exercise_id {
            activity.exercise_id = exercise_id;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if self.duration.is_some() {
            activity.duration = self.duration;
        }
        if self.reps.is_some() {
            activity.reps = self.reps;
        }
        if self.weight.is_some() {
            activity.weight = self.weight;
        }
        if self.distance.is_some() {
            activity.distance = self.distance;
        }
        if self.laps.is_some() {
            activity.laps = self.laps;
        }
        if self.sets.is_some() {
            activity.sets = self.sets;
        }
    }
}

// ─── Reads ───────────────────────────────────────────────────

/// Get the caller's activities for today.
async fn activities_today(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<PopulatedActivity>>> {
    let today = state.today();
    let activities = state.activity_service.load_day(&user.user_id, today).await?;
    Ok(Json(activities))
}

/// Get the caller's activities for one day (`YYYY-MM-DD`).
async fn activities_on(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(date): Path<String>,
) -> Result<Json<Vec<PopulatedActivity>>> {
    let day = parse_day(&date)?;
    let activities = state.activity_service.load_day(&user.user_id, day).await?;
    Ok(Json(activities))
}

/// Get the caller's activities for an inclusive day range.
async fn activities_between(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<Vec<PopulatedActivity>>> {
    let (from, to) = parse_day_range(&from, &to)?;

    tracing::debug!(user_id = %user.user_id, %from, %to, "Fetching activities in range");

    let activities = state
        .activity_service
        .load_range(&user.user_id, from, to)
        .await?;
    Ok(Json(activities))
}

// ─── Writes ──────────────────────────────────────────────────

/// Reject an activity whose exercise is unknown, or that repeats an
/// exercise already logged by the user that day.
async fn check_activity(state: &AppState, activity: &Activity) -> Result<()> {
    if state.db.get_exercise(&activity.exercise_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Unknown exercise: {}",
            activity.exercise_id
        )));
    }

    let existing = state
        .db
        .find_activity_for_exercise(&activity.user_id, activity.date, &activity.exercise_id)
        .await?;

    match existing {
        Some(other) if other.id != activity.id => Err(AppError::BadRequest(
            "An activity with the same exercise has already been entered for the day. \
             Please edit that activity."
                .to_string(),
        )),
        _ => Ok(()),
    }
}

/// Log a new activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<Activity>)> {
    body.validate()?;

    let today = state.today();
    let activity = body.into_activity(new_document_id(), user.user_id, today);

    check_activity(&state, &activity).await?;
    state.db.set_document(&activity).await?;

    tracing::info!(
        user_id = %activity.user_id,
        activity_id = %activity.id,
        exercise_id = %activity.exercise_id,
        date = %activity.date,
        "Logged activity"
    );

    Ok((StatusCode::CREATED, Json(activity)))
}

/// Update one of the caller's activities.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateActivityRequest>,
) -> Result<Json<Activity>> {
    body.validate()?;

    let mut activity: Activity = state
        .db
        .get_owned_document(&user.user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    let moved = body.exercise_id.is_some() || body.date.is_some();
    body.apply(&mut activity);

    if moved {
        check_activity(&state, &activity).await?;
    }

    state.db.set_document(&activity).await?;

    tracing::info!(user_id = %user.user_id, activity_id = %id, "Updated activity");

    Ok(Json(activity))
}

/// Delete one of the caller's activities and return it.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    let activity: Activity = state
        .db
        .get_owned_document(&user.user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    state.db.delete_document::<Activity>(&id).await?;

    tracing::info!(user_id = %user.user_id, activity_id = %id, "Deleted activity");

    Ok(Json(activity))
}
