// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Exercises (shared definitions)
//! - Per-user day documents (activities, nutrition, life parameters, interests)

use std::collections::HashMap;

use chrono::NaiveDate;
use futures_util::{stream, StreamExt};

use crate::db::{collections, UserDocument};
use crate::error::AppError;
use crate::models::{Activity, Exercise, ExerciseRecord};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Get all exercises, ordered by name.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .order_by([("name", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get exercises whose `field` equals `value` (type, muscle group, intensity).
    pub async fn list_exercises_where(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Vec<Exercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .filter(|q| q.for_all([q.field(field).eq(value)]))
            .order_by([("name", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an exercise by document ID.
    pub async fn get_exercise(&self, id: &str) -> Result<Option<Exercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::EXERCISES)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find an exercise by its (normalized) name.
    pub async fn find_exercise_by_name(&self, name: &str) -> Result<Option<Exercise>, AppError> {
        let matches: Vec<Exercise> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::EXERCISES)
            .filter(|q| q.for_all([q.field("name").eq(name)]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(matches.into_iter().next())
    }

    /// Create or update an exercise.
    pub async fn set_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::EXERCISES)
            .document_id(&exercise.id)
            .object(exercise)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete an exercise. Activities referencing it are left in place.
    pub async fn delete_exercise(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::EXERCISES)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Look up exercise records for a set of IDs.
    ///
    /// IDs with no document are absent from the returned map.
    pub async fn get_exercise_records(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, ExerciseRecord>, AppError> {
        let client = self.get_client()?;

        let found = stream::iter(ids.iter().cloned())
            .map(|id| async move {
                let record: Option<ExerciseRecord> = client
                    .fluent()
                    .select()
                    .by_id_in(collections::EXERCISES)
                    .obj()
                    .one(&id)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok::<_, AppError>(record.map(|r| (id, r)))
            })
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<Option<(String, ExerciseRecord)>, AppError>>>()
            .await;

        let mut records = HashMap::with_capacity(found.len());
        for entry in found {
            if let Some((id, record)) = entry? {
                records.insert(id, record);
            }
        }
        Ok(records)
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Find the user's activity for a given exercise on a given day.
    pub async fn find_activity_for_exercise(
        &self,
        user_id: &str,
        date: NaiveDate,
        exercise_id: &str,
    ) -> Result<Option<Activity>, AppError> {
        let date = date.to_string();
        let matches: Vec<Activity> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(|q| {
                q.for_all([
                    q.field("user_id").eq(user_id),
                    q.field("date").eq(date.as_str()),
                    q.field("exercise_id").eq(exercise_id),
                ])
            })
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(matches.into_iter().next())
    }

    // ─── Per-User Day Documents ──────────────────────────────────

    /// Get a document by ID, regardless of owner.
    pub async fn get_document<T: UserDocument>(&self, id: &str) -> Result<Option<T>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(T::COLLECTION)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a document by ID only if it belongs to `user_id`.
    pub async fn get_owned_document<T: UserDocument>(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<T>, AppError> {
        Ok(self
            .get_document::<T>(id)
            .await?
            .filter(|doc| doc.user_id() == user_id))
    }

    /// Create or update a document.
    pub async fn set_document<T: UserDocument>(&self, doc: &T) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(T::COLLECTION)
            .document_id(doc.id())
            .object(doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a document by ID.
    pub async fn delete_document<T: UserDocument>(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(T::COLLECTION)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get all of a user's documents filed under `date`.
    pub async fn list_for_day<T: UserDocument>(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<T>, AppError> {
        let date = date.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(T::COLLECTION)
            .filter(|q| {
                q.for_all([
                    q.field("user_id").eq(user_id),
                    q.field("date").eq(date.as_str()),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get all of a user's documents between `from` and `to`, both inclusive.
    ///
    /// Dates are stored as `YYYY-MM-DD`, so string order is calendar order.
    pub async fn list_for_range<T: UserDocument>(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<T>, AppError> {
        let from = from.to_string();
        let to = to.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(T::COLLECTION)
            .filter(|q| {
                q.for_all([
                    q.field("user_id").eq(user_id),
                    q.field("date").greater_than_or_equal(from.as_str()),
                    q.field("date").less_than_or_equal(to.as_str()),
                ])
            })
            .order_by([("date", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
