// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod daily;
pub mod exercise;
pub mod rating;

pub use activity::{Activity, PopulatedActivity, ResolvedActivity};
pub use daily::{Interest, Level, LifeParam, Nutrition};
pub use exercise::{
    Exercise, ExerciseIntensity, ExerciseProfile, ExerciseRecord, ExerciseType, MuscleGroup,
};
pub use rating::{ActivityRating, Rating, RatingBreakdown};

/// A string that does not name any member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
