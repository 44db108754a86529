// ABOUTME: Route handlers for the weekly workout plan REST API
// ABOUTME: Provides REST endpoints for CRUD operations on weekly plan entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Weekly plan routes
//!
//! Thin handlers over [`crate::services::plans`]. Plan entries are purely
//! declarative and never feed into the streak statistics.

use crate::{
    errors::AppError,
    models::{CreatePlanRequest, PlanEntry, UpdatePlanRequest},
    server::ServerResources,
    services::plans,
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

/// A plan entry as it appears on the wire
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Unique identifier
    pub id: String,
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: u32,
    /// Plan entry name
    pub name: String,
    /// Planned duration in minutes
    pub duration: u32,
    /// Number of exercises planned
    pub exercise_count: u32,
    /// Focus areas (muscle groups or themes)
    #[serde(rename = "focus")]
    pub focus_areas: Vec<String>,
    /// Scheduling status
    pub status: String,
    /// Week number the plan belongs to
    pub week: u32,
}

impl From<PlanEntry> for PlanResponse {
    fn from(entry: PlanEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            day_of_week: entry.day_of_week,
            name: entry.name,
            duration: entry.duration_minutes,
            exercise_count: entry.exercise_count,
            focus_areas: entry.focus_areas,
            status: entry.status.as_str().to_owned(),
            week: entry.week,
        }
    }
}

/// Request body for creating a plan entry
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanBody {
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: u32,
    /// Plan entry name
    pub name: String,
    /// Planned duration in minutes
    pub duration: u32,
    /// Number of exercises planned
    pub exercise_count: u32,
    /// Focus areas (muscle groups or themes)
    #[serde(rename = "focus", default)]
    pub focus_areas: Vec<String>,
    /// Scheduling status; defaults to `upcoming`
    #[serde(default)]
    pub status: Option<String>,
    /// Week number; defaults to 1
    #[serde(default)]
    pub week: Option<u32>,
}

impl From<CreatePlanBody> for CreatePlanRequest {
    fn from(body: CreatePlanBody) -> Self {
        Self {
            day_of_week: body.day_of_week,
            name: body.name,
            duration_minutes: body.duration,
            exercise_count: body.exercise_count,
            focus_areas: body.focus_areas,
            status: body.status,
            week: body.week,
        }
    }
}

/// Request body for updating a plan entry
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanBody {
    /// New day of week (if provided)
    pub day_of_week: Option<u32>,
    /// New name (if provided)
    pub name: Option<String>,
    /// New duration in minutes (if provided)
    pub duration: Option<u32>,
    /// New exercise count (if provided)
    pub exercise_count: Option<u32>,
    /// New focus areas (if provided)
    #[serde(rename = "focus")]
    pub focus_areas: Option<Vec<String>>,
    /// New status (if provided)
    pub status: Option<String>,
    /// New week number (if provided)
    pub week: Option<u32>,
}

impl From<UpdatePlanBody> for UpdatePlanRequest {
    fn from(body: UpdatePlanBody) -> Self {
        Self {
            day_of_week: body.day_of_week,
            name: body.name,
            duration_minutes: body.duration,
            exercise_count: body.exercise_count,
            focus_areas: body.focus_areas,
            status: body.status,
            week: body.week,
        }
    }
}

/// Weekly plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all weekly plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout-plans", get(Self::handle_list))
            .route("/api/workout-plans", post(Self::handle_create))
            .route("/api/workout-plans/:id", get(Self::handle_get))
            .route("/api/workout-plans/:id", put(Self::handle_update))
            .route("/api/workout-plans/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Parse a plan entry ID path segment
    fn parse_id(id: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(id)
            .map_err(|_| AppError::invalid_input(format!("Invalid plan entry ID: {id}")))
    }

    /// Handle GET /api/workout-plans - List the weekly plan
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let entries = plans::list_plans(&resources.database).await?;
        let response: Vec<PlanResponse> = entries.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/workout-plans - Add a plan entry
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreatePlanBody>,
    ) -> Result<Response, AppError> {
        let request: CreatePlanRequest = body.into();
        let entry = plans::create_plan(&resources.database, request).await?;

        let response: PlanResponse = entry.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/workout-plans/:id - Get a specific plan entry
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan_id = Self::parse_id(&id)?;
        let entry = plans::get_plan(&resources.database, plan_id).await?;

        let response: PlanResponse = entry.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/workout-plans/:id - Update a plan entry
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<UpdatePlanBody>,
    ) -> Result<Response, AppError> {
        let plan_id = Self::parse_id(&id)?;
        let request: UpdatePlanRequest = body.into();
        let entry = plans::update_plan(&resources.database, plan_id, request).await?;

        let response: PlanResponse = entry.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/workout-plans/:id - Remove a plan entry
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan_id = Self::parse_id(&id)?;
        plans::delete_plan(&resources.database, plan_id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
