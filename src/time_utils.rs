// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar days and timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};

use crate::error::{AppError, Result};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar day that `now` falls on at the given UTC offset.
pub fn calendar_day(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Parse a `YYYY-MM-DD` path segment.
pub fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}': expected YYYY-MM-DD", raw))
    })
}

/// Parse an inclusive `from`/`to` day range.
pub fn parse_day_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate)> {
    let from = parse_day(from)?;
    let to = parse_day(to)?;
    if from > to {
        return Err(AppError::BadRequest(format!(
            "Invalid range: {} is after {}",
            from, to
        )));
    }
    Ok((from, to))
}
