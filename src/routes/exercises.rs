// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise definition routes.
//!
//! Reads are public; creating, editing and deleting exercises requires a
//! signed-in user.

use crate::db::new_document_id;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::exercise::normalize_name;
use crate::models::{Exercise, ExerciseIntensity, ExerciseType, MuscleGroup};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

const MAX_NAME_LEN: u64 = 100;

/// Read-only exercise routes.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", get(list_exercises))
        .route("/api/exercises/name/{name}", get(get_exercise_by_name))
        .route("/api/exercises/id/{id}", get(get_exercise))
        .route("/api/exercises/type/{exercise_type}", get(list_by_type))
        .route("/api/exercises/pmg/{pmg}", get(list_by_muscle_group))
        .route("/api/exercises/intensity/{intensity}", get(list_by_intensity))
}

/// Exercise routes that modify data. The auth layer is applied in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", post(create_exercise))
        .route(
            "/api/exercises/id/{id}",
            patch(update_exercise).delete(delete_exercise),
        )
}

// ─── Requests ────────────────────────────────────────────────

/// Body for creating an exercise.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "Name is required"))]
    pub name: String,
    #[validate(required(message = "Exercise type is required"))]
    pub exercise_type: Option<ExerciseType>,
    #[validate(required(message = "Primary muscle group is required"))]
    pub primary_muscle_group: Option<MuscleGroup>,
    #[validate(required(message = "Exercise intensity is required"))]
    pub intensity: Option<ExerciseIntensity>,
}

impl CreateExerciseRequest {
    /// Validate the request and build the exercise to store.
    pub fn into_exercise(mut self, id: String) -> Result<Exercise> {
        self.name = normalize_name(&self.name);
        self.validate()?;

        let (Some(exercise_type), Some(primary_muscle_group), Some(intensity)) =
            (self.exercise_type, self.primary_muscle_group, self.intensity)
        else {
            return Err(AppError::BadRequest(
                "Exercise type, muscle group and intensity are required".to_string(),
            ));
        };

        Ok(Exercise {
            id,
            name: self.name,
            exercise_type,
            primary_muscle_group,
            intensity,
        })
    }
}

/// Body for a partial exercise update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, max = MAX_NAME_LEN, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub exercise_type: Option<ExerciseType>,
    pub primary_muscle_group: Option<MuscleGroup>,
    pub intensity: Option<ExerciseIntensity>,
}

impl UpdateExerciseRequest {
    /// Normalize and validate, then apply to `exercise`.
    pub fn apply(mut self, exercise: &mut Exercise) -> Result<()> {
        self.name = self.name.as_deref().map(normalize_name);
        self.validate()?;

        if let Some(name) = self.name {
            exercise.name = name;
        }
        if let Some(exercise_type) = self.exercise_type {
            exercise.exercise_type = exercise_type;
        }
        if let Some(group) = self.primary_muscle_group {
            exercise.primary_muscle_group = group;
        }
        if let Some(intensity) = self.intensity {
            exercise.intensity = intensity;
        }
        Ok(())
    }
}

// ─── Reads ───────────────────────────────────────────────────

async fn list_exercises(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Exercise>>> {
    Ok(Json(state.db.list_exercises().await?))
}

async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>> {
    state
        .db
        .get_exercise(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))
}

async fn get_exercise_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Exercise>> {
    state
        .db
        .find_exercise_by_name(&normalize_name(&name))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))
}

async fn list_by_type(
    State(state): State<Arc<AppState>>,
    Path(exercise_type): Path<String>,
) -> Result<Json<Vec<Exercise>>> {
    let exercise_type: ExerciseType = exercise_type.parse()?;
    let exercises = state
        .db
        .list_exercises_where("exercise_type", exercise_type.as_str())
        .await?;
    Ok(Json(exercises))
}

async fn list_by_muscle_group(
    State(state): State<Arc<AppState>>,
    Path(pmg): Path<String>,
) -> Result<Json<Vec<Exercise>>> {
    let group: MuscleGroup = pmg.parse()?;
    let exercises = state
        .db
        .list_exercises_where("primary_muscle_group", group.as_str())
        .await?;
    Ok(Json(exercises))
}

async fn list_by_intensity(
    State(state): State<Arc<AppState>>,
    Path(intensity): Path<String>,
) -> Result<Json<Vec<Exercise>>> {
    let intensity: ExerciseIntensity = intensity.parse()?;
    let exercises = state
        .db
        .list_exercises_where("intensity", intensity.as_str())
        .await?;
    Ok(Json(exercises))
}

// ─── Writes ──────────────────────────────────────────────────

/// Create a new exercise. Names are unique.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateExerciseRequest>,
) -> Result<Json<Exercise>> {
    let exercise = body.into_exercise(new_document_id())?;

    if state
        .db
        .find_exercise_by_name(&exercise.name)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Exercise already exists".to_string()));
    }

    state.db.set_exercise(&exercise).await?;

    tracing::info!(
        user_id = %user.user_id,
        exercise_id = %exercise.id,
        name = %exercise.name,
        "Created exercise"
    );

    Ok(Json(exercise))
}

/// Update an exercise in place.
async fn update_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<UpdateExerciseRequest>,
) -> Result<Json<Exercise>> {
    let mut exercise = state
        .db
        .get_exercise(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    let previous_name = exercise.name.clone();
    body.apply(&mut exercise)?;

    if exercise.name != previous_name {
        if let Some(existing) = state.db.find_exercise_by_name(&exercise.name).await? {
            if existing.id != exercise.id {
                return Err(AppError::BadRequest("Exercise already exists".to_string()));
            }
        }
    }

    state.db.set_exercise(&exercise).await?;

    tracing::info!(user_id = %user.user_id, exercise_id = %id, "Updated exercise");

    Ok(Json(exercise))
}

/// Delete an exercise and return it.
///
/// Activities that reference it stay in place and are rated as unresolved.
async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .db
        .get_exercise(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    state.db.delete_exercise(&id).await?;

    tracing::info!(user_id = %user.user_id, exercise_id = %id, "Deleted exercise");

    Ok(Json(exercise))
}
