// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity rating engine.
//!
//! Scores one day of activities on three considerations and sums them:
//!
//! | Consideration | Input                                   | Points  |
//! |---------------|-----------------------------------------|---------|
//! | Volume        | number of activities                    | 0-40    |
//! | Intensity     | high/medium mix, only from 5 activities | 0-30    |
//! | Variety       | distinct tracked exercise types         | 0-30    |
//!
//! The total maps to a [`Rating`]: 0 is none, 1-29 low, 30-74 medium and
//! 75 or more high.
//!
//! Activities whose exercise could not be resolved still count toward
//! volume but are left out of the intensity and variety tallies, as are
//! intensities and types that were not recognized.

use std::collections::BTreeMap;

use crate::models::{
    ActivityRating, ExerciseIntensity, ExerciseType, Rating, RatingBreakdown, ResolvedActivity,
};

/// Fewest activities for which the intensity mix is scored.
pub const INTENSITY_MIN_ACTIVITIES: usize = 5;

/// High (or high plus medium) activities needed for the upper intensity tiers.
pub const INTENSITY_TIER_COUNT: usize = 10;

/// Exercise types that count toward variety.
///
/// Trekking is deliberately absent; a trekking-only day scores no variety.
pub const VARIETY_TYPES: [ExerciseType; 5] = [
    ExerciseType::Weight,
    ExerciseType::Cardio,
    ExerciseType::Sport,
    ExerciseType::Yoga,
    ExerciseType::BodyWeight,
];

/// Points for the number of activities logged.
pub fn volume_points(count: usize) -> u32 {
    match count {
        0 => 0,
        1..=4 => 10,
        5..=8 => 20,
        9..=12 => 30,
        _ => 40,
    }
}

/// Points for the intensity mix of `count` activities.
pub fn intensity_points(count: usize, tally: &IntensityTally) -> u32 {
    if count < INTENSITY_MIN_ACTIVITIES {
        return 0;
    }

    let high = tally.get(ExerciseIntensity::High);
    let medium = tally.get(ExerciseIntensity::Medium);

    if high >= INTENSITY_TIER_COUNT {
        30
    } else if high + medium >= INTENSITY_TIER_COUNT {
        20
    } else {
        10
    }
}

/// Points for the number of distinct tracked exercise types.
pub fn variety_points(distinct_types: usize) -> u32 {
    match distinct_types {
        0 => 0,
        1 => 5,
        2 => 10,
        3 => 20,
        _ => 30,
    }
}

/// Map a point total to its rating.
pub fn classify(points: u32) -> Rating {
    match points {
        0 => Rating::None,
        1..=29 => Rating::Low,
        30..=74 => Rating::Medium,
        _ => Rating::High,
    }
}

/// Count of activities per intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityTally(BTreeMap<ExerciseIntensity, usize>);

impl IntensityTally {
    pub fn from_activities(activities: &[ResolvedActivity]) -> Self {
        let mut counts: BTreeMap<ExerciseIntensity, usize> = ExerciseIntensity::ALL
            .into_iter()
            .map(|intensity| (intensity, 0))
            .collect();

        for intensity in activities.iter().filter_map(ResolvedActivity::intensity) {
            if let Some(count) = counts.get_mut(&intensity) {
                *count += 1;
            }
        }

        Self(counts)
    }

    pub fn get(&self, intensity: ExerciseIntensity) -> usize {
        self.0.get(&intensity).copied().unwrap_or(0)
    }
}

/// Count of activities per tracked exercise type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTally(BTreeMap<ExerciseType, usize>);

impl TypeTally {
    pub fn from_activities(activities: &[ResolvedActivity]) -> Self {
        let mut counts: BTreeMap<ExerciseType, usize> =
            VARIETY_TYPES.into_iter().map(|t| (t, 0)).collect();

        for exercise_type in activities.iter().filter_map(ResolvedActivity::exercise_type) {
            // Untracked types have no entry and are skipped.
            if let Some(count) = counts.get_mut(&exercise_type) {
                *count += 1;
            }
        }

        Self(counts)
    }

    pub fn get(&self, exercise_type: ExerciseType) -> usize {
        self.0.get(&exercise_type).copied().unwrap_or(0)
    }

    /// Number of tracked types seen at least once.
    pub fn distinct(&self) -> usize {
        self.0.values().filter(|&&count| count > 0).count()
    }
}

/// Score each consideration separately.
pub fn score(activities: &[ResolvedActivity]) -> RatingBreakdown {
    let count = activities.len();

    RatingBreakdown {
        volume: volume_points(count),
        intensity: intensity_points(count, &IntensityTally::from_activities(activities)),
        variety: variety_points(TypeTally::from_activities(activities).distinct()),
    }
}

/// Rate one day of activities.
pub fn compute_rating(activities: &[ResolvedActivity]) -> ActivityRating {
    let points = score(activities).points();
    ActivityRating {
        points,
        rating: classify(points),
    }
}
