// ABOUTME: Route handlers for the workout log REST API
// ABOUTME: Provides REST endpoints for CRUD operations on logged workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout log routes
//!
//! Thin handlers over [`crate::services::workouts`]. Creating a workout also
//! folds it into the streak statistics; when that second step fails the
//! workout is kept and the response carries the failure alongside the row.

use crate::{
    errors::AppError,
    models::{CreateWorkoutRequest, UpdateWorkoutRequest, Workout},
    routes::stats::StatsResponse,
    server::ServerResources,
    services::workouts,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A workout as it appears on the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// Unique identifier
    pub id: String,
    /// Workout name
    pub name: String,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Perceived intensity on a 1-10 scale
    pub intensity: u32,
    /// Calories burned
    pub calories: u32,
    /// Occurrence timestamp (RFC 3339)
    pub date: String,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercise names performed during the workout
    pub exercises: Vec<String>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.to_string(),
            name: workout.name,
            workout_type: workout.workout_type.as_str().to_owned(),
            duration: workout.duration_minutes,
            intensity: workout.intensity,
            calories: workout.calories,
            date: workout.date.to_rfc3339(),
            notes: workout.notes,
            exercises: workout.exercises,
        }
    }
}

/// Request body for logging a workout
///
/// The occurrence date is server-assigned and deliberately absent here.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutBody {
    /// Workout name
    pub name: String,
    /// Workout category
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Perceived intensity on a 1-10 scale
    pub intensity: u32,
    /// Calories burned
    pub calories: u32,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Exercise names performed during the workout
    #[serde(default)]
    pub exercises: Vec<String>,
}

impl From<CreateWorkoutBody> for CreateWorkoutRequest {
    fn from(body: CreateWorkoutBody) -> Self {
        Self {
            name: body.name,
            workout_type: body.workout_type,
            duration_minutes: body.duration,
            intensity: body.intensity,
            calories: body.calories,
            notes: body.notes,
            exercises: body.exercises,
        }
    }
}

/// Request body for updating a workout
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutBody {
    /// New name (if provided)
    pub name: Option<String>,
    /// New category (if provided)
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    /// New duration in minutes (if provided)
    pub duration: Option<u32>,
    /// New intensity (if provided)
    pub intensity: Option<u32>,
    /// New calories (if provided)
    pub calories: Option<u32>,
    /// New notes (if provided)
    pub notes: Option<String>,
}

impl From<UpdateWorkoutBody> for UpdateWorkoutRequest {
    fn from(body: UpdateWorkoutBody) -> Self {
        Self {
            name: body.name,
            workout_type: body.workout_type,
            duration_minutes: body.duration,
            intensity: body.intensity,
            calories: body.calories,
            notes: body.notes,
        }
    }
}

/// Response for a created workout
///
/// Carries the stored workout at the top level plus the statistics outcome:
/// `stats` on success, `statsError` when the stats update failed after the
/// workout row was already committed.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutResponse {
    /// The stored workout
    #[serde(flatten)]
    pub workout: WorkoutResponse,
    /// Statistics after ingestion, when it succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsResponse>,
    /// Reason the statistics update failed, when it did
    #[serde(rename = "statsError", skip_serializing_if = "Option::is_none")]
    pub stats_error: Option<String>,
}

/// Workout log routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts", post(Self::handle_create))
            .route("/api/workouts/:id", get(Self::handle_get))
            .route("/api/workouts/:id", put(Self::handle_update))
            .route("/api/workouts/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Parse a workout ID path segment
    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id).map_err(|_| AppError::invalid_input(format!("Invalid workout ID: {id}")))
    }

    /// Handle GET /api/workouts - List all workouts, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = workouts::list_workouts(&resources.database).await?;
        let response: Vec<WorkoutResponse> = workouts.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/workouts - Log a new workout
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateWorkoutBody>,
    ) -> Result<Response, AppError> {
        let request: CreateWorkoutRequest = body.into();
        let creation = workouts::create_workout(&resources.database, request).await?;

        let response = CreateWorkoutResponse {
            workout: creation.workout.into(),
            stats: creation.stats.map(Into::into),
            stats_error: creation.stats_error,
        };

        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/workouts/:id - Get a specific workout
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let workout_id = Self::parse_id(&id)?;
        let workout = workouts::get_workout(&resources.database, workout_id).await?;

        let response: WorkoutResponse = workout.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/workouts/:id - Update a workout's mutable fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateWorkoutBody>,
    ) -> Result<Response, AppError> {
        let workout_id = Self::parse_id(&id)?;
        let request: UpdateWorkoutRequest = body.into();
        let workout = workouts::update_workout(&resources.database, workout_id, request).await?;

        let response: WorkoutResponse = workout.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/workouts/:id - Remove a workout
    ///
    /// The streak statistics are not recomputed; ingestion is one-way.
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let workout_id = Self::parse_id(&id)?;
        workouts::delete_workout(&resources.database, workout_id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
