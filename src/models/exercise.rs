// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise definitions and their classification enums.

use super::UnknownValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Broad category of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ExerciseType {
    /// Weight lifting
    Weight,
    /// Treadmill, jogging, kickboxing, cycling, swimming
    Cardio,
    /// Badminton, soccer, cricket, ...
    Sport,
    Yoga,
    /// Push ups, pull ups, ...
    BodyWeight,
    Trekking,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 6] = [
        ExerciseType::Weight,
        ExerciseType::Cardio,
        ExerciseType::Sport,
        ExerciseType::Yoga,
        ExerciseType::BodyWeight,
        ExerciseType::Trekking,
    ];

    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseType::Weight => "weight",
            ExerciseType::Cardio => "cardio",
            ExerciseType::Sport => "sport",
            ExerciseType::Yoga => "yoga",
            ExerciseType::BodyWeight => "body-weight",
            ExerciseType::Trekking => "trekking",
        }
    }
}

/// How demanding an exercise is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ExerciseIntensity {
    Low,
    Medium,
    High,
}

impl ExerciseIntensity {
    pub const ALL: [ExerciseIntensity; 3] = [
        ExerciseIntensity::Low,
        ExerciseIntensity::Medium,
        ExerciseIntensity::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseIntensity::Low => "low",
            ExerciseIntensity::Medium => "medium",
            ExerciseIntensity::High => "high",
        }
    }
}

/// Primary muscle group worked by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MuscleGroup {
    Bicep,
    Tricep,
    Shoulder,
    Chest,
    Forearm,
    Quad,
    Calf,
    Hamstring,
    Back,
    Core,
    Glutes,
    None,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 12] = [
        MuscleGroup::Bicep,
        MuscleGroup::Tricep,
        MuscleGroup::Shoulder,
        MuscleGroup::Chest,
        MuscleGroup::Forearm,
        MuscleGroup::Quad,
        MuscleGroup::Calf,
        MuscleGroup::Hamstring,
        MuscleGroup::Back,
        MuscleGroup::Core,
        MuscleGroup::Glutes,
        MuscleGroup::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MuscleGroup::Bicep => "bicep",
            MuscleGroup::Tricep => "tricep",
            MuscleGroup::Shoulder => "shoulder",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Forearm => "forearm",
            MuscleGroup::Quad => "quad",
            MuscleGroup::Calf => "calf",
            MuscleGroup::Hamstring => "hamstring",
            MuscleGroup::Back => "back",
            MuscleGroup::Core => "core",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::None => "none",
        }
    }
}

impl FromStr for ExerciseType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownValue::new("exercise type", s))
    }
}

impl FromStr for ExerciseIntensity {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| UnknownValue::new("exercise intensity", s))
    }
}

impl FromStr for MuscleGroup {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| UnknownValue::new("muscle group", s))
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExerciseIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise definition stored in Firestore.
///
/// Stored at: `exercises/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Document ID
    pub id: String,
    /// Unique, lowercased name
    pub name: String,
    pub exercise_type: ExerciseType,
    pub primary_muscle_group: MuscleGroup,
    pub intensity: ExerciseIntensity,
}

/// Normalize an exercise name for storage and lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lenient view of a stored exercise.
///
/// Attributes are kept as raw strings so that a document carrying a value
/// outside the known enumerations can still be read and joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercise_type: String,
    #[serde(default)]
    pub primary_muscle_group: String,
    #[serde(default)]
    pub intensity: String,
}

impl From<&Exercise> for ExerciseRecord {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            exercise_type: exercise.exercise_type.as_str().to_string(),
            primary_muscle_group: exercise.primary_muscle_group.as_str().to_string(),
            intensity: exercise.intensity.as_str().to_string(),
        }
    }
}

/// The rating-relevant attributes of a resolved exercise.
///
/// `None` means the stored value was missing or not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseProfile {
    pub exercise_type: Option<ExerciseType>,
    pub intensity: Option<ExerciseIntensity>,
}

impl ExerciseProfile {
    pub fn new(exercise_type: ExerciseType, intensity: ExerciseIntensity) -> Self {
        Self {
            exercise_type: Some(exercise_type),
            intensity: Some(intensity),
        }
    }
}

impl From<&ExerciseRecord> for ExerciseProfile {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            exercise_type: record.exercise_type.parse().ok(),
            intensity: record.intensity.parse().ok(),
        }
    }
}
