// ABOUTME: Persistence for the singleton streak statistics record
// ABOUTME: Lazy row creation plus version-checked writes for lost-update protection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::Database;
use crate::models::StatsRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Fixed primary key of the singleton statistics row
const STATS_ROW_ID: i64 = 1;

impl Database {
    /// Create the statistics table
    ///
    /// # Errors
    ///
    /// Returns an error if the schema migration fails.
    pub(super) async fn migrate_stats(&self) -> Result<()> {
        // Single-row table; the CHECK pins the primary key to one value
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_stats (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                current_streak INTEGER NOT NULL DEFAULT 0,
                best_streak INTEGER NOT NULL DEFAULT 0,
                total_workouts INTEGER NOT NULL DEFAULT 0,
                last_workout_date DATETIME,
                version INTEGER NOT NULL DEFAULT 0,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the statistics record, creating the zero-valued default if absent
    ///
    /// Concurrent first calls converge on the same row; the insert is a
    /// no-op for every caller but one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_or_create_stats(&self) -> Result<StatsRecord> {
        let (record, _) = self.get_stats_for_update().await?;
        Ok(record)
    }

    /// Get the statistics record together with its current version
    ///
    /// The version feeds the compare-and-swap in `try_update_stats`; a
    /// read-modify-write cycle must carry the version it read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn get_stats_for_update(&self) -> Result<(StatsRecord, i64)> {
        sqlx::query("INSERT INTO user_stats (id) VALUES ($1) ON CONFLICT(id) DO NOTHING")
            .bind(STATS_ROW_ID)
            .execute(&self.pool)
            .await?;

        let row = sqlx::query(
            r"
            SELECT current_streak, best_streak, total_workouts, last_workout_date, version
            FROM user_stats WHERE id = $1
            ",
        )
        .bind(STATS_ROW_ID)
        .fetch_one(&self.pool)
        .await?;

        let version: i64 = row.get("version");
        Ok((row_to_stats(&row), version))
    }

    /// Write the statistics record if the stored version still matches
    ///
    /// Returns `false` when another writer got there first; the caller
    /// re-reads and reapplies its change against the fresh state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn try_update_stats(
        &self,
        record: &StatsRecord,
        expected_version: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE user_stats SET
                current_streak = $2,
                best_streak = $3,
                total_workouts = $4,
                last_workout_date = $5,
                version = version + 1,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND version = $6
            ",
        )
        .bind(STATS_ROW_ID)
        .bind(i64::from(record.current_streak))
        .bind(i64::from(record.best_streak))
        .bind(i64::from(record.total_workouts))
        .bind(record.last_workout_date)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Replace the statistics record unconditionally
    ///
    /// Used by the manual-correction endpoint and the demo seeder. The
    /// version still advances so in-flight read-modify-write cycles notice
    /// the replacement and retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_stats(&self, record: &StatsRecord) -> Result<StatsRecord> {
        sqlx::query("INSERT INTO user_stats (id) VALUES ($1) ON CONFLICT(id) DO NOTHING")
            .bind(STATS_ROW_ID)
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            UPDATE user_stats SET
                current_streak = $2,
                best_streak = $3,
                total_workouts = $4,
                last_workout_date = $5,
                version = version + 1,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            ",
        )
        .bind(STATS_ROW_ID)
        .bind(i64::from(record.current_streak))
        .bind(i64::from(record.best_streak))
        .bind(i64::from(record.total_workouts))
        .bind(record.last_workout_date)
        .execute(&self.pool)
        .await?;

        self.get_or_create_stats().await
    }
}

fn row_to_stats(row: &SqliteRow) -> StatsRecord {
    let current_streak: i64 = row.get("current_streak");
    let best_streak: i64 = row.get("best_streak");
    let total_workouts: i64 = row.get("total_workouts");
    let last_workout_date: Option<DateTime<Utc>> = row.get("last_workout_date");

    StatsRecord {
        current_streak: u32::try_from(current_streak).unwrap_or(0),
        best_streak: u32::try_from(best_streak).unwrap_or(0),
        total_workouts: u32::try_from(total_workouts).unwrap_or(0),
        last_workout_date,
    }
}
