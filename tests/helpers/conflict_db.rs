// ABOUTME: Database wrapper that injects version conflicts into statistics writes
// ABOUTME: Lets tests drive the bounded retry path without racing real writers

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitlog::database_plugins::{factory::Database, DatabaseProvider};
use fitlog::models::{PlanEntry, StatsRecord, Workout};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Wraps a real database and reports a version conflict for a configured
/// number of `try_update_stats` calls before delegating normally.
///
/// Pass `u32::MAX` to keep every statistics write conflicting.
#[derive(Clone)]
pub struct ConflictingStatsDatabase {
    inner: Database,
    conflicts_remaining: Arc<AtomicU32>,
}

impl ConflictingStatsDatabase {
    /// Wrap a database, failing the next `conflicts` statistics writes
    #[allow(dead_code)]
    pub fn wrap(inner: Database, conflicts: u32) -> Self {
        Self {
            inner,
            conflicts_remaining: Arc::new(AtomicU32::new(conflicts)),
        }
    }

    /// Consume one pending conflict, returning whether one was pending
    fn take_conflict(&self) -> bool {
        self.conflicts_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl DatabaseProvider for ConflictingStatsDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        Ok(Self {
            inner: Database::new(database_url).await?,
            conflicts_remaining: Arc::new(AtomicU32::new(0)),
        })
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
        if self.take_conflict() {
            return Ok(false);
        }
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
