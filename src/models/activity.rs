// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged activity model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::{collections, UserDocument};
use crate::models::exercise::{
    ExerciseIntensity, ExerciseProfile, ExerciseRecord, ExerciseType,
};

/// One logged performance of an exercise by a user on a calendar day.
///
/// Stored at: `activities/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Document ID
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Referenced exercise document ID
    pub exercise_id: String,
    /// Calendar day the activity belongs to
    pub date: NaiveDate,
    /// Minutes
    pub duration: Option<f64>,
    /// Repetitions per set
    pub reps: Option<u32>,
    /// Kilograms
    pub weight: Option<f64>,
    /// Metres
    pub distance: Option<f64>,
    /// Laps, typically for swimming
    pub laps: Option<u32>,
    /// Sets when lifting weights
    pub sets: Option<u32>,
    /// When the activity was logged (RFC3339, UTC)
    pub logged_at: String,
}

impl UserDocument for Activity {
    const COLLECTION: &'static str = collections::ACTIVITIES;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Activity joined with the exercise it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulatedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    /// `None` if the referenced exercise no longer exists
    pub exercise: Option<ExerciseRecord>,
}

/// An activity reduced to what the rating engine looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedActivity {
    /// `None` if the exercise reference could not be resolved
    pub exercise: Option<ExerciseProfile>,
}

impl ResolvedActivity {
    pub fn new(exercise_type: ExerciseType, intensity: ExerciseIntensity) -> Self {
        Self {
            exercise: Some(ExerciseProfile::new(exercise_type, intensity)),
        }
    }

    pub fn unresolved() -> Self {
        Self { exercise: None }
    }

    pub fn exercise_type(&self) -> Option<ExerciseType> {
        self.exercise.and_then(|e| e.exercise_type)
    }

    pub fn intensity(&self) -> Option<ExerciseIntensity> {
        self.exercise.and_then(|e| e.intensity)
    }
}

impl From<&PopulatedActivity> for ResolvedActivity {
    fn from(populated: &PopulatedActivity) -> Self {
        Self {
            exercise: populated.exercise.as_ref().map(ExerciseProfile::from),
        }
    }
}
