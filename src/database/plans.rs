// ABOUTME: Weekly workout plan database operations
// ABOUTME: Handles plan entry CRUD ordered by week and day of week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::Database;
use crate::models::PlanEntry;
use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the workout plans table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database schema migration fails
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_plans(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_plans (
                id TEXT PRIMARY KEY,
                day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
                name TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL DEFAULT 0,
                exercise_count INTEGER NOT NULL DEFAULT 0,
                focus_areas TEXT NOT NULL DEFAULT '[]',
                status TEXT NOT NULL DEFAULT 'upcoming' CHECK (status IN ('today', 'completed', 'upcoming', 'rest', 'flexible')),
                week INTEGER NOT NULL DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workout_plans_day ON workout_plans(week, day_of_week)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new plan entry
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the focus list cannot be
    /// serialized.
    pub async fn create_plan(&self, entry: &PlanEntry) -> Result<Uuid> {
        let focus_json = serde_json::to_string(&entry.focus_areas)?;

        sqlx::query(
            r"
            INSERT INTO workout_plans (
                id, day_of_week, name, duration_minutes, exercise_count, focus_areas, status, week
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(entry.id.to_string())
        .bind(i64::from(entry.day_of_week))
        .bind(&entry.name)
        .bind(i64::from(entry.duration_minutes))
        .bind(i64::from(entry.exercise_count))
        .bind(&focus_json)
        .bind(entry.status.as_str())
        .bind(i64::from(entry.week))
        .execute(&self.pool)
        .await?;

        Ok(entry.id)
    }

    /// Get a plan entry by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the row cannot
    /// be decoded.
    pub async fn get_plan(&self, plan_id: Uuid) -> Result<Option<PlanEntry>> {
        let row = sqlx::query(
            r"
            SELECT id, day_of_week, name, duration_minutes, exercise_count, focus_areas, status, week
            FROM workout_plans WHERE id = $1
            ",
        )
        .bind(plan_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_plan).transpose()
    }

    /// Get all plan entries ordered by week, then day of week
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row cannot be
    /// decoded.
    pub async fn get_plans(&self) -> Result<Vec<PlanEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, day_of_week, name, duration_minutes, exercise_count, focus_areas, status, week
            FROM workout_plans ORDER BY week, day_of_week
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_plan).collect()
    }

    /// Update an existing plan entry
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the focus list
    /// cannot be serialized.
    pub async fn update_plan(&self, entry: &PlanEntry) -> Result<()> {
        let focus_json = serde_json::to_string(&entry.focus_areas)?;

        sqlx::query(
            r"
            UPDATE workout_plans SET
                day_of_week = $2,
                name = $3,
                duration_minutes = $4,
                exercise_count = $5,
                focus_areas = $6,
                status = $7,
                week = $8
            WHERE id = $1
            ",
        )
        .bind(entry.id.to_string())
        .bind(i64::from(entry.day_of_week))
        .bind(&entry.name)
        .bind(i64::from(entry.duration_minutes))
        .bind(i64::from(entry.exercise_count))
        .bind(&focus_json)
        .bind(entry.status.as_str())
        .bind(i64::from(entry.week))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a plan entry by ID, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_plan(&self, plan_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workout_plans WHERE id = $1")
            .bind(plan_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_plan(row: &SqliteRow) -> Result<PlanEntry> {
    let id: String = row.get("id");
    let day_of_week: i64 = row.get("day_of_week");
    let duration_minutes: i64 = row.get("duration_minutes");
    let exercise_count: i64 = row.get("exercise_count");
    let focus_json: String = row.get("focus_areas");
    let status: String = row.get("status");
    let week: i64 = row.get("week");

    Ok(PlanEntry {
        id: Uuid::parse_str(&id)?,
        day_of_week: u32::try_from(day_of_week).unwrap_or(0),
        name: row.get("name"),
        duration_minutes: u32::try_from(duration_minutes).unwrap_or(0),
        exercise_count: u32::try_from(exercise_count).unwrap_or(0),
        focus_areas: serde_json::from_str(&focus_json)?,
        status: status.parse()?,
        week: u32::try_from(week).unwrap_or(1),
    })
}
