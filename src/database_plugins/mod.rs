// ABOUTME: Database abstraction layer for the fitlog server
// ABOUTME: Plugin architecture with a provider trait and runtime backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Database provider abstraction
//!
//! All database backends implement [`DatabaseProvider`] so the service and
//! route layers stay independent of the concrete storage engine.

use crate::models::{PlanEntry, StatsRecord, Workout};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod factory;
pub mod sqlite;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Statistics Singleton
    // ================================

    /// Get the statistics record, creating the zero-valued default if absent
    async fn get_or_create_stats(&self) -> Result<StatsRecord>;

    /// Get the statistics record together with its optimistic-lock version
    async fn get_stats_for_update(&self) -> Result<(StatsRecord, i64)>;

    /// Write the statistics record if the stored version still matches;
    /// returns `false` when a concurrent writer advanced it first
    async fn try_update_stats(&self, record: &StatsRecord, expected_version: i64) -> Result<bool>;

    /// Replace the statistics record unconditionally and return the stored value
    async fn update_stats(&self, record: &StatsRecord) -> Result<StatsRecord>;

    // ================================
    // Workout Log
    // ================================

    /// Insert a new workout row
    async fn create_workout(&self, workout: &Workout) -> Result<Uuid>;

    /// Get a workout by ID
    async fn get_workout(&self, workout_id: Uuid) -> Result<Option<Workout>>;

    /// Get all workouts, newest first
    async fn get_workouts(&self) -> Result<Vec<Workout>>;

    /// Update the mutable fields of an existing workout row
    async fn update_workout(&self, workout: &Workout) -> Result<()>;

    /// Delete a workout by ID, returning whether a row was removed
    async fn delete_workout(&self, workout_id: Uuid) -> Result<bool>;

    /// Get workouts on or after a cutoff timestamp, newest first
    async fn get_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<Workout>>;

    /// Count workouts on or after a cutoff timestamp
    async fn count_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<i64>;

    /// Sum calories over workouts on or after a cutoff timestamp
    async fn sum_calories_after(&self, cutoff: DateTime<Utc>) -> Result<i64>;

    // ================================
    // Weekly Plan
    // ================================

    /// Insert a new plan entry
    async fn create_plan(&self, entry: &PlanEntry) -> Result<Uuid>;

    /// Get a plan entry by ID
    async fn get_plan(&self, plan_id: Uuid) -> Result<Option<PlanEntry>>;

    /// Get all plan entries ordered by week, then day of week
    async fn get_plans(&self) -> Result<Vec<PlanEntry>>;

    /// Update an existing plan entry
    async fn update_plan(&self, entry: &PlanEntry) -> Result<()>;

    /// Delete a plan entry by ID, returning whether a row was removed
    async fn delete_plan(&self, plan_id: Uuid) -> Result<bool>;
}
