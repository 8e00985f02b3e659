// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health Tracker: log exercises, daily activities and habits
//!
//! This crate provides the backend API for recording a user's activities,
//! nutrition, life parameters and interests, and for rating each day's
//! activity level.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use chrono::{NaiveDate, Utc};
use config::Config;
use db::FirestoreDb;
use services::ActivityService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub activity_service: ActivityService,
}

impl AppState {
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        let activity_service = ActivityService::new(db.clone());
        Self {
            config,
            db,
            activity_service,
        }
    }

    /// The calendar day it currently is for this deployment.
    pub fn today(&self) -> NaiveDate {
        time_utils::calendar_day(Utc::now(), self.config.day_offset())
    }
}
