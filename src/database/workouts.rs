// ABOUTME: Workout log database operations
// ABOUTME: Handles workout CRUD plus recent-window count and calorie queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::Database;
use crate::models::Workout;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the workouts table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database schema migration fails
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_workouts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                workout_type TEXT NOT NULL CHECK (workout_type IN ('strength', 'cardio', 'flexibility', 'sports', 'other')),
                duration_minutes INTEGER NOT NULL,
                intensity INTEGER NOT NULL,
                calories INTEGER NOT NULL,
                date DATETIME NOT NULL,
                notes TEXT,
                exercises TEXT NOT NULL DEFAULT '[]',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Listing and recent-window queries sort and filter on date
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new workout row
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the exercise list cannot be
    /// serialized.
    pub async fn create_workout(&self, workout: &Workout) -> Result<Uuid> {
        let exercises_json = serde_json::to_string(&workout.exercises)?;

        sqlx::query(
            r"
            INSERT INTO workouts (
                id, name, workout_type, duration_minutes, intensity, calories, date, notes, exercises
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(workout.workout_type.as_str())
        .bind(i64::from(workout.duration_minutes))
        .bind(i64::from(workout.intensity))
        .bind(i64::from(workout.calories))
        .bind(workout.date)
        .bind(&workout.notes)
        .bind(&exercises_json)
        .execute(&self.pool)
        .await?;

        Ok(workout.id)
    }

    /// Get a workout by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the row cannot
    /// be decoded.
    pub async fn get_workout(&self, workout_id: Uuid) -> Result<Option<Workout>> {
        let row = sqlx::query(
            r"
            SELECT id, name, workout_type, duration_minutes, intensity, calories, date, notes, exercises
            FROM workouts WHERE id = $1
            ",
        )
        .bind(workout_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// Get all workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row cannot be
    /// decoded.
    pub async fn get_workouts(&self) -> Result<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, workout_type, duration_minutes, intensity, calories, date, notes, exercises
            FROM workouts ORDER BY date DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Update the mutable fields of an existing workout row
    ///
    /// The occurrence date and exercise list are fixed at creation and are
    /// not written here.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update_workout(&self, workout: &Workout) -> Result<()> {
        sqlx::query(
            r"
            UPDATE workouts SET
                name = $2,
                workout_type = $3,
                duration_minutes = $4,
                intensity = $5,
                calories = $6,
                notes = $7
            WHERE id = $1
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(workout.workout_type.as_str())
        .bind(i64::from(workout.duration_minutes))
        .bind(i64::from(workout.intensity))
        .bind(i64::from(workout.calories))
        .bind(&workout.notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a workout by ID, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_workout(&self, workout_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get workouts on or after a cutoff timestamp, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row cannot be
    /// decoded.
    pub async fn get_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, workout_type, duration_minutes, intensity, calories, date, notes, exercises
            FROM workouts WHERE date >= $1 ORDER BY date DESC
            ",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Count workouts on or after a cutoff timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn count_workouts_after(&self, cutoff: DateTime<Utc>) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE date >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Sum calories over workouts on or after a cutoff timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn sum_calories_after(&self, cutoff: DateTime<Utc>) -> Result<i64> {
        let total =
            sqlx::query_scalar("SELECT COALESCE(SUM(calories), 0) FROM workouts WHERE date >= $1")
                .bind(cutoff)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }
}

fn row_to_workout(row: &SqliteRow) -> Result<Workout> {
    let id: String = row.get("id");
    let workout_type: String = row.get("workout_type");
    let duration_minutes: i64 = row.get("duration_minutes");
    let intensity: i64 = row.get("intensity");
    let calories: i64 = row.get("calories");
    let exercises_json: String = row.get("exercises");

    Ok(Workout {
        id: Uuid::parse_str(&id)?,
        name: row.get("name"),
        workout_type: workout_type.parse()?,
        duration_minutes: u32::try_from(duration_minutes).unwrap_or(0),
        intensity: u32::try_from(intensity).unwrap_or(0),
        calories: u32::try_from(calories).unwrap_or(0),
        date: row.get("date"),
        notes: row.get("notes"),
        exercises: serde_json::from_str(&exercises_json)?,
    })
}
