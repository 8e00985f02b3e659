// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity rating result types.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Qualitative label for a day's point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Rating {
    None,
    Low,
    Medium,
    High,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::None => "none",
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity rating response: `{"points": 40, "rating": "medium"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRating {
    pub points: u32,
    pub rating: Rating,
}

/// Points contributed by each consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingBreakdown {
    /// Number of activities (0-40)
    pub volume: u32,
    /// Intensity mix, only scored from 5 activities up (0-30)
    pub intensity: u32,
    /// Distinct tracked exercise types (0-30)
    pub variety: u32,
}

impl RatingBreakdown {
    pub fn points(&self) -> u32 {
        self.volume + self.intensity + self.variety
    }
}
