// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Once-per-day log entries: nutrition, life parameters and interests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::{collections, UserDocument};

/// Four-step scale used by the daily logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Low,
    Medium,
    High,
}

/// Daily intake levels.
///
/// Stored at: `nutrition/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
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

/// Sleep, productivity and stress for a day.
///
/// Stored at: `lifeparams/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeParam {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    /// Hours slept
    pub sleep: f64,
    pub office_productivity: Level,
    pub stress: Level,
}

/// Which hobbies were pursued on a day.
///
/// Stored at: `interests/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    /// Blogs, articles, scripts, stories
    pub write: Option<bool>,
    /// Video editing or learning about it
    pub video: Option<bool>,
    /// Books, not news or magazines
    pub read: Option<bool>,
    /// Preparing your own meals
    pub cook: Option<bool>,
    pub travel: Option<bool>,
    pub social: Option<bool>,
}

impl UserDocument for Nutrition {
    const COLLECTION: &'static str = collections::NUTRITION;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl UserDocument for LifeParam {
    const COLLECTION: &'static str = collections::LIFEPARAMS;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl UserDocument for Interest {
    const COLLECTION: &'static str = collections::INTERESTS;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}
