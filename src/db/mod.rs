// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

use serde::{de::DeserializeOwned, Serialize};

/// Collection names as constants.
pub mod collections {
    pub const EXERCISES: &str = "exercises";
    pub const ACTIVITIES: &str = "activities";
    pub const NUTRITION: &str = "nutrition";
    pub const LIFEPARAMS: &str = "lifeparams";
    pub const INTERESTS: &str = "interests";
}

/// A document owned by one user and filed under a calendar day.
///
/// Implementors are stored flat in `COLLECTION`, keyed by `id()`, and carry
/// `user_id` and `date` fields that the day queries filter on.
pub trait UserDocument: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn user_id(&self) -> &str;
}

/// Fresh document ID.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
