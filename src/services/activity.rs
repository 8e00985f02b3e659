// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity loading and daily rating service.
//!
//! Handles the workflow behind the rating endpoint:
//! 1. Fetch the user's activities for the day
//! 2. Resolve each activity's exercise reference
//! 3. Run the rating engine over the resolved set

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::models::{
    Activity, ActivityRating, ExerciseRecord, PopulatedActivity, ResolvedActivity,
};
use crate::services::rating;

/// Loads a user's activities and rates their days.
#[derive(Clone)]
pub struct ActivityService {
    db: FirestoreDb,
}

impl ActivityService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// All activities logged by `user_id` on `day`, with their exercises.
    pub async fn load_day(&self, user_id: &str, day: NaiveDate) -> Result<Vec<PopulatedActivity>> {
        let activities: Vec<Activity> = self.db.list_for_day(user_id, day).await?;
        self.populate(activities).await
    }

    /// All activities logged by `user_id` from `from` to `to`, inclusive.
    pub async fn load_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PopulatedActivity>> {
        let activities: Vec<Activity> = self.db.list_for_range(user_id, from, to).await?;
        self.populate(activities).await
    }

    /// Rate the activities `user_id` logged on `day`.
    pub async fn rate_day(&self, user_id: &str, day: NaiveDate) -> Result<ActivityRating> {
        let populated = self.load_day(user_id, day).await?;
        let resolved: Vec<ResolvedActivity> =
            populated.iter().map(ResolvedActivity::from).collect();

        let breakdown = rating::score(&resolved);
        let result = ActivityRating {
            points: breakdown.points(),
            rating: rating::classify(breakdown.points()),
        };

        tracing::debug!(
            user_id,
            %day,
            activities = resolved.len(),
            volume = breakdown.volume,
            intensity = breakdown.intensity,
            variety = breakdown.variety,
            points = result.points,
            rating = %result.rating,
            "Computed activity rating"
        );

        Ok(result)
    }

    /// Join activities with the exercises they reference.
    async fn populate(&self, activities: Vec<Activity>) -> Result<Vec<PopulatedActivity>> {
        let exercise_ids: Vec<String> = activities
            .iter()
            .map(|a| a.exercise_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let exercises = self.db.get_exercise_records(&exercise_ids).await?;
        Ok(resolve_activities(activities, &exercises))
    }
}

/// Attach each activity's exercise record, if one exists.
pub fn resolve_activities(
    activities: Vec<Activity>,
    exercises: &HashMap<String, ExerciseRecord>,
) -> Vec<PopulatedActivity> {
    activities
        .into_iter()
        .map(|activity| {
            let exercise = exercises.get(&activity.exercise_id).cloned();
            if exercise.is_none() {
                tracing::warn!(
                    activity_id = %activity.id,
                    exercise_id = %activity.exercise_id,
                    "Activity references a missing exercise"
                );
            }
            PopulatedActivity { activity, exercise }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseIntensity, ExerciseType};

    fn activity(id: &str, exercise_id: &str) -> Activity {
        Activity {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            exercise_id: exercise_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 24).unwrap(),
            duration: Some(30.0),
            reps: None,
            weight: None,
            distance: None,
            laps: None,
            sets: None,
            logged_at: "2024-05-24T08:00:00Z".to_string(),
        }
    }

    fn record(id: &str, exercise_type: &str, intensity: &str) -> ExerciseRecord {
        ExerciseRecord {
            id: id.to_string(),
            name: format!("exercise {}", id),
            exercise_type: exercise_type.to_string(),
            primary_muscle_group: "core".to_string(),
            intensity: intensity.to_string(),
        }
    }

    #[test]
    fn test_resolve_attaches_exercises() {
        let exercises = HashMap::from([
            ("run".to_string(), record("run", "cardio", "high")),
            ("flow".to_string(), record("flow", "yoga", "low")),
        ]);

        let populated = resolve_activities(
            vec![activity("a1", "run"), activity("a2", "flow")],
            &exercises,
        );

        assert_eq!(populated.len(), 2);
        let resolved: Vec<ResolvedActivity> =
            populated.iter().map(ResolvedActivity::from).collect();
        assert_eq!(
            resolved[0],
            ResolvedActivity::new(ExerciseType::Cardio, ExerciseIntensity::High)
        );
        assert_eq!(
            resolved[1],
            ResolvedActivity::new(ExerciseType::Yoga, ExerciseIntensity::Low)
        );
    }

    #[test]
    fn test_resolve_keeps_activity_with_missing_exercise() {
        let exercises = HashMap::from([("run".to_string(), record("run", "cardio", "high"))]);

        let populated = resolve_activities(
            vec![activity("a1", "run"), activity("a2", "deleted")],
            &exercises,
        );

        assert_eq!(populated.len(), 2);
        assert!(populated[1].exercise.is_none());
        assert_eq!(
            ResolvedActivity::from(&populated[1]),
            ResolvedActivity::unresolved()
        );
    }

    #[test]
    fn test_unrecognized_values_resolve_to_none() {
        let exercises = HashMap::from([("x".to_string(), record("x", "rowing", "extreme"))]);

        let populated = resolve_activities(vec![activity("a1", "x")], &exercises);
        let resolved = ResolvedActivity::from(&populated[0]);

        assert!(resolved.exercise.is_some());
        assert_eq!(resolved.exercise_type(), None);
        assert_eq!(resolved.intensity(), None);
    }
}
