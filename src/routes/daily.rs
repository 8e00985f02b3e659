// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Once-per-day log routes: nutrition, life parameters and interests.
//!
//! Every log kind gets the same set of routes under its base path:
//!
//! | Method | Path                        | Action                           |
//! |--------|-----------------------------|----------------------------------|
//! | POST   | `/`                         | create the entry for a day       |
//! | GET    | `/today`, `/date/{date}`    | the entry for a day, or `null`   |
//! | GET    | `/date/from/{from}/to/{to}` | entries in an inclusive range    |
//! | GET    | `/id/{id}`                  | one entry                        |
//! | PATCH  | `/id/{id}`                  | partial update                   |
//! | DELETE | `/id/{id}`                  | delete and return the entry      |

use crate::db::{new_document_id, UserDocument};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Interest, Level, LifeParam, Nutrition};
use crate::time_utils::{parse_day, parse_day_range};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::Arc;
use validator::Validate;

/// Daily log routes (require authentication via JWT).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(log_routes::<Nutrition>("/api/nutrition"))
        .merge(log_routes::<LifeParam>("/api/lifeparam"))
        .merge(log_routes::<Interest>("/api/interest"))
}

/// A document kind a user records at most once per day.
pub trait DailyLog: UserDocument {
    /// Human-readable name for error messages.
    const NAME: &'static str;

    type Fields: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    fn create(id: String, user_id: String, date: NaiveDate, fields: Self::Fields) -> Self;

    fn apply(&mut self, update: Self::Update);
}

/// Body for creating a daily entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntry<F> {
    /// Defaults to today
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub fields: F,
}

fn log_routes<T: DailyLog>(base: &str) -> Router<Arc<AppState>> {
    Router::new()
        .route(base, post(create_entry::<T>))
        .route(&format!("{base}/today"), get(entry_today::<T>))
        .route(&format!("{base}/date/{{date}}"), get(entry_on::<T>))
        .route(
            &format!("{base}/date/from/{{from}}/to/{{to}}"),
            get(entries_between::<T>),
        )
        .route(
            &format!("{base}/id/{{id}}"),
            get(get_entry::<T>)
                .patch(update_entry::<T>)
                .delete(delete_entry::<T>),
        )
}

fn not_found<T: DailyLog>() -> AppError {
    AppError::NotFound(format!("{} not found", T::NAME))
}

async fn create_entry<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateEntry<T::Fields>>,
) -> Result<(StatusCode, Json<T>)> {
    body.fields.validate()?;
    let date = body.date.unwrap_or_else(|| state.today());

    let existing: Vec<T> = state.db.list_for_day(&user.user_id, date).await?;
    if !existing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} details have already been entered for {}. Please edit that entry.",
            T::NAME,
            date
        )));
    }

    let entry = T::create(new_document_id(), user.user_id, date, body.fields);
    state.db.set_document(&entry).await?;

    tracing::info!(
        user_id = %entry.user_id(),
        entry_id = %entry.id(),
        kind = T::NAME,
        %date,
        "Created daily entry"
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

async fn entry_today<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Option<T>>> {
    let today = state.today();
    let entries: Vec<T> = state.db.list_for_day(&user.user_id, today).await?;
    Ok(Json(entries.into_iter().next()))
}

async fn entry_on<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(date): Path<String>,
) -> Result<Json<Option<T>>> {
    let day = parse_day(&date)?;
    let entries: Vec<T> = state.db.list_for_day(&user.user_id, day).await?;
    Ok(Json(entries.into_iter().next()))
}

async fn entries_between<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<Vec<T>>> {
    let (from, to) = parse_day_range(&from, &to)?;
    let entries = state.db.list_for_range(&user.user_id, from, to).await?;
    Ok(Json(entries))
}

async fn get_entry<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<T>> {
    state
        .db
        .get_owned_document(&user.user_id, &id)
        .await?
        .map(Json)
        .ok_or_else(not_found::<T>)
}

async fn update_entry<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(update): Json<T::Update>,
) -> Result<Json<T>> {
    update.validate()?;

    let mut entry: T = state
        .db
        .get_owned_document(&user.user_id, &id)
        .await?
        .ok_or_else(not_found::<T>)?;

    entry.apply(update);
    state.db.set_document(&entry).await?;

    tracing::info!(user_id = %user.user_id, entry_id = %id, kind = T::NAME, "Updated daily entry");

    Ok(Json(entry))
}

async fn delete_entry<T: DailyLog>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<T>> {
    let entry: T = state
        .db
        .get_owned_document(&user.user_id, &id)
        .await?
        .ok_or_else(not_found::<T>)?;

    state.db.delete_document::<T>(&id).await?;

    tracing::info!(user_id = %user.user_id, entry_id = %id, kind = T::NAME, "Deleted daily entry");

    Ok(Json(entry))
}

// ─── Nutrition ───────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct NutritionFields {
    pub protein_intake: Level,
    pub fruit_intake: Level,
    pub green_intake: Level,
    pub sugar_intake: Level,
    pub junk_intake: Level,
    pub water_intake: Level,
    pub tobacco_intake: Level,
    pub alcohol_intake: Level,
    pub pot_intake: Level,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct NutritionUpdate {
    pub protein_intake: Option<Level>,
    pub fruit_intake: Option<Level>,
    pub green_intake: Option<Level>,
    pub sugar_intake: Option<Level>,
    pub junk_intake: Option<Level>,
    pub water_intake: Option<Level>,
    pub tobacco_intake: Option<Level>,
    pub alcohol_intake: Option<Level>,
    pub pot_intake: Option<Level>,
}

impl DailyLog for Nutrition {
    const NAME: &'static str = "Nutrition";

    type Fields = NutritionFields;
    type Update = NutritionUpdate;

    fn create(id: String, user_id: String, date: NaiveDate, f: NutritionFields) -> Self {
        Self {
            id,
            user_id,
            date,
            protein_intake: f.protein_intake,
            fruit_intake: f.fruit_intake,
            green_intake: f.green_intake,
            sugar_intake: f.sugar_intake,
            junk_intake: f.junk_intake,
            water_intake: f.water_intake,
            tobacco_intake: f.tobacco_intake,
            alcohol_intake: f.alcohol_intake,
            pot_intake: f.pot_intake,
        }
    }

    fn apply(&mut self, u: NutritionUpdate) {
        let pairs = [
            (&mut self.protein_intake, u.protein_intake),
            (&mut self.fruit_intake, u.fruit_intake),
            (&mut self.green_intake, u.green_intake),
            (&mut self.sugar_intake, u.sugar_intake),
            (&mut self.junk_intake, u.junk_intake),
            (&mut self.water_intake, u.water_intake),
            (&mut self.tobacco_intake, u.tobacco_intake),
            (&mut self.alcohol_intake, u.alcohol_intake),
            (&mut self.pot_intake, u.pot_intake),
        ];
        for (field, value) in pairs {
            if let Some(level) = value {
                *field = level;
            }
        }
    }
}

// ─── Life Parameters ─────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct LifeParamFields {
    #[validate(range(min = 0.0, max = 24.0, message = "Sleep must be between 0 and 24 hours"))]
    pub sleep: f64,
    pub office_productivity: Level,
    pub stress: Level,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LifeParamUpdate {
    #[validate(range(min = 0.0, max = 24.0, message = "Sleep must be between 0 and 24 hours"))]
    pub sleep: Option<f64>,
    pub office_productivity: Option<Level>,
    pub stress: Option<Level>,
}

impl DailyLog for LifeParam {
    const NAME: &'static str = "Lifeparam";

    type Fields = LifeParamFields;
    type Update = LifeParamUpdate;

    fn create(id: String, user_id: String, date: NaiveDate, f: LifeParamFields) -> Self {
        Self {
            id,
            user_id,
            date,
            sleep: f.sleep,
            office_productivity: f.office_productivity,
            stress: f.stress,
        }
    }

    fn apply(&mut self, u: LifeParamUpdate) {
        if let Some(sleep) = u.sleep {
            self.sleep = sleep;
        }
        if let Some(level) = u.office_productivity {
            self.office_productivity = level;
        }
        if let Some(level) = u.stress {
            self.stress = level;
        }
    }
}

// ─── Interests ───────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Validate)]
pub struct InterestFields {
    pub write: Option<bool>,
    pub video: Option<bool>,
    pub read: Option<bool>,
    pub cook: Option<bool>,
    pub travel: Option<bool>,
    pub social: Option<bool>,
}

impl DailyLog for Interest {
    const NAME: &'static str = "Interest";

    type Fields = InterestFields;
    type Update = InterestFields;

    fn create(id: String, user_id: String, date: NaiveDate, f: InterestFields) -> Self {
        Self {
            id,
            user_id,
            date,
            write: f.write,
            video: f.video,
            read: f.read,
            cook: f.cook,
            travel: f.travel,
            social: f.social,
        }
    }

    fn apply(&mut self, u: InterestFields) {
        let pairs = [
            (&mut self.write, u.write),
            (&mut self.video, u.video),
            (&mut self.read, u.read),
            (&mut self.cook, u.cook),
            (&mut self.travel, u.travel),
            (&mut self.social, u.social),
        ];
        for (field, value) in pairs {
            if value.is_some() {
                *field = value;
            }
        }
    }
}
