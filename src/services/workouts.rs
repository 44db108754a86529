// ABOUTME: Workout log business logic extracted from route handlers
// ABOUTME: Field validation, creation with streak ingestion, CRUD, and activity summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout service
//!
//! Creating a workout is a two-step operation: the workout row is stored
//! first, then its occurrence date is folded into the streak statistics.
//! A statistics failure after the row is committed is reported as a partial
//! result rather than undoing the workout.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::constants::validation;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{
    ActivitySummary, CreateWorkoutRequest, StatsRecord, UpdateWorkoutRequest, Workout, WorkoutType,
};
use crate::services::stats;

/// Outcome of creating a workout
#[derive(Debug)]
pub struct WorkoutCreation {
    /// The stored workout
    pub workout: Workout,
    /// Statistics after ingestion, when it succeeded
    pub stats: Option<StatsRecord>,
    /// Reason the statistics update failed, when it did
    pub stats_error: Option<String>,
}

/// Validate and store a new workout, then fold it into the streak statistics
///
/// The server assigns the identifier and the occurrence date; client-supplied
/// dates are never accepted. When the workout row commits but the statistics
/// update fails, the workout is kept and the failure is carried in the result.
///
/// # Errors
///
/// Returns a validation error for out-of-range fields or an unknown workout
/// type, or a database error if the workout row cannot be stored
pub async fn create_workout<DB: DatabaseProvider>(
    database: &DB,
    request: CreateWorkoutRequest,
) -> AppResult<WorkoutCreation> {
    let name = normalize_name(&request.name)?;
    let workout_type = parse_workout_type(&request.workout_type)?;
    validate_bounds(request.duration_minutes, request.intensity, request.calories)?;

    let workout = Workout {
        id: Uuid::new_v4(),
        name,
        workout_type,
        duration_minutes: request.duration_minutes,
        intensity: request.intensity,
        calories: request.calories,
        date: Utc::now(),
        notes: request.notes,
        exercises: request.exercises,
    };

    database
        .create_workout(&workout)
        .await
        .map_err(|e| AppError::database(format!("Failed to store workout: {e}")))?;

    // The workout row is durable at this point; a statistics failure must
    // not undo it
    match stats::record_workout(database, workout.date).await {
        Ok(updated) => Ok(WorkoutCreation {
            workout,
            stats: Some(updated),
            stats_error: None,
        }),
        Err(e) => {
            warn!(
                workout_id = %workout.id,
                error = %e,
                "Workout stored but statistics update failed"
            );
            Ok(WorkoutCreation {
                workout,
                stats: None,
                stats_error: Some(e.to_string()),
            })
        }
    }
}

/// Get a workout by ID
///
/// # Errors
///
/// Returns `ResourceNotFound` if no workout has this ID, or a database error
pub async fn get_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
) -> AppResult<Workout> {
    database
        .get_workout(workout_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to load workout {workout_id}: {e}")))?
        .ok_or_else(|| {
            AppError::not_found(format!("Workout {workout_id}"))
                .with_resource_id(workout_id.to_string())
        })
}

/// List all workouts, newest first
///
/// # Errors
///
/// Returns a database error if the workout log cannot be read
pub async fn list_workouts<DB: DatabaseProvider>(database: &DB) -> AppResult<Vec<Workout>> {
    database
        .get_workouts()
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))
}

/// Update the mutable fields of an existing workout
///
/// The occurrence date and the exercise list are fixed at creation and are
/// never touched here, so already-ingested streak state stays consistent.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID, a validation error for
/// out-of-range replacement values, or a database error
pub async fn update_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    request: UpdateWorkoutRequest,
) -> AppResult<Workout> {
    let mut workout = get_workout(database, workout_id).await?;

    if let Some(name) = request.name {
        workout.name = normalize_name(&name)?;
    }
    if let Some(raw) = request.workout_type {
        workout.workout_type = parse_workout_type(&raw)?;
    }
    if let Some(duration) = request.duration_minutes {
        workout.duration_minutes = duration;
    }
    if let Some(intensity) = request.intensity {
        workout.intensity = intensity;
    }
    if let Some(calories) = request.calories {
        workout.calories = calories;
    }
    if let Some(notes) = request.notes {
        workout.notes = Some(notes);
    }

    validate_bounds(workout.duration_minutes, workout.intensity, workout.calories)?;

    database
        .update_workout(&workout)
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout {workout_id}: {e}")))?;

    Ok(workout)
}

/// Delete a workout by ID
///
/// Deleting a workout does not rewind the streak statistics; ingestion is
/// one-way.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no workout has this ID, or a database error
pub async fn delete_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
) -> AppResult<()> {
    let removed = database
        .delete_workout(workout_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete workout {workout_id}: {e}")))?;

    if removed {
        Ok(())
    } else {
        Err(AppError::not_found(format!("Workout {workout_id}"))
            .with_resource_id(workout_id.to_string()))
    }
}

/// List workouts logged on or after a cutoff timestamp, newest first
///
/// # Errors
///
/// Returns a database error if the workout log cannot be read
pub async fn workouts_since<DB: DatabaseProvider>(
    database: &DB,
    since: DateTime<Utc>,
) -> AppResult<Vec<Workout>> {
    database
        .get_workouts_after(since)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recent workouts: {e}")))
}

/// Summarize workouts logged in the trailing window of `days` days
///
/// # Errors
///
/// Returns a database error if the aggregates cannot be computed
pub async fn activity_summary<DB: DatabaseProvider>(
    database: &DB,
    days: u32,
) -> AppResult<ActivitySummary> {
    let since = Utc::now() - chrono::Duration::days(i64::from(days));
    summary_since(database, since).await
}

/// Summarize workouts logged on or after a cutoff timestamp
///
/// # Errors
///
/// Returns a database error if the aggregates cannot be computed
pub async fn summary_since<DB: DatabaseProvider>(
    database: &DB,
    since: DateTime<Utc>,
) -> AppResult<ActivitySummary> {
    let workout_count = database
        .count_workouts_after(since)
        .await
        .map_err(|e| AppError::database(format!("Failed to count workouts: {e}")))?;

    let total_calories = database
        .sum_calories_after(since)
        .await
        .map_err(|e| AppError::database(format!("Failed to sum calories: {e}")))?;

    Ok(ActivitySummary {
        since,
        workout_count: u32::try_from(workout_count).unwrap_or(0),
        total_calories: u32::try_from(total_calories).unwrap_or(0),
    })
}

/// Trim a workout name and reject empty results
fn normalize_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Workout name is required",
        ));
    }
    Ok(trimmed.to_owned())
}

/// Parse a workout type from its request string form
fn parse_workout_type(raw: &str) -> AppResult<WorkoutType> {
    WorkoutType::from_str(raw).map_err(|_| {
        AppError::invalid_input(format!(
            "Invalid workout type '{raw}', expected one of: strength, cardio, flexibility, sports, other"
        ))
    })
}

/// Check the numeric workout fields against their allowed ranges
fn validate_bounds(duration_minutes: u32, intensity: u32, calories: u32) -> AppResult<()> {
    if duration_minutes < validation::DURATION_MIN_MINUTES {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!(
                "Duration must be at least {} minute(s)",
                validation::DURATION_MIN_MINUTES
            ),
        ));
    }

    if !(validation::INTENSITY_MIN..=validation::INTENSITY_MAX).contains(&intensity) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!(
                "Intensity must be between {} and {}",
                validation::INTENSITY_MIN,
                validation::INTENSITY_MAX
            ),
        ));
    }

    if calories < validation::CALORIES_MIN {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Calories must be at least {}", validation::CALORIES_MIN),
        ));
    }

    Ok(())
}
