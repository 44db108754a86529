// ABOUTME: SQLite backend for the database provider trait
// ABOUTME: Wraps the sqlite Database manager and delegates every provider operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! `SQLite` database implementation
//!
//! This module wraps the `SQLite` database functionality
//! to implement the `DatabaseProvider` trait.

use super::DatabaseProvider;
use crate::models::{PlanEntry, StatsRecord, Workout};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database
    #[must_use]
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn get_or_create_stats(&self) -> Result<StatsRecord> {
        self.inner.get_or_create_stats().await
    }

    async fn get_stats_for_update(&self) -> Result<(StatsRecord, i64)> {
        self.inner.get_stats_for_update().await
    }

    async fn try_update_stats(&self, record: &StatsRecord, expected_version: i64) -> Result<bool> {
        self.inner.try_update_stats(record, expected_version).await
    }

    async fn update_stats(&self, record: &StatsRecord) -> Result<StatsRecord> {
        self.inner.update_stats(record).await
    }

    async fn create_workout(&self, workout: &Workout) -> Result<Uuid> {
        self.inner.create_workout(workout).await
    }

    async fn get_workout(&self, workout_id: Uuid) -> Result<Option<Workout>> {
        self.inner.get_workout(workout_id).await
    }

    async fn get_workouts(&self) -> Result<Vec<Workout>> {
        self.inner.get_workouts().await
    }

    async fn update_workout(&self, workout: &Workout) -> Result<()> {
        self.inner.update_workout(workout).await
    }

    async fn delete_workout(&self, workout_id: Uuid) -> Result<bool> {
        self.inner.delete_workout(workout_id).await
    }

    async fn get_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<Workout>> {
        self.inner.get_workouts_after(cutoff).await
    }

    async fn count_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<i64> {
        self.inner.count_workouts_after(cutoff).await
    }

    async fn sum_calories_after(&self, cutoff: DateTime<Utc>) -> Result<i64> {
        self.inner.sum_calories_after(cutoff).await
    }

    async fn create_plan(&self, entry: &PlanEntry) -> Result<Uuid> {
        self.inner.create_plan(entry).await
    }

    async fn get_plan(&self, plan_id: Uuid) -> Result<Option<PlanEntry>> {
        self.inner.get_plan(plan_id).await
    }

    async fn get_plans(&self) -> Result<Vec<PlanEntry>> {
        self.inner.get_plans().await
    }

    async fn update_plan(&self, entry: &PlanEntry) -> Result<()> {
        self.inner.update_plan(entry).await
    }

    async fn delete_plan(&self, plan_id: Uuid) -> Result<bool> {
        self.inner.delete_plan(plan_id).await
    }
}
