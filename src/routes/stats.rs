// ABOUTME: Route handlers for the streak statistics REST API
// ABOUTME: Exposes the singleton statistics record for reading and administrative replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Statistics routes
//!
//! The statistics record is a singleton; these endpoints read it (creating
//! the zero-valued default on first access) and replace it wholesale. Normal
//! ingestion happens as a side effect of logging workouts, not here.

use crate::{
    errors::AppError,
    models::StatsRecord,
    server::ServerResources,
    services::stats,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The statistics record as it appears on the wire
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Consecutive-day count ending at the last workout date
    pub current_streak: u32,
    /// Best consecutive-day count ever achieved
    pub best_streak: u32,
    /// Total number of logged workouts
    pub total_workouts: u32,
    /// Date of the most recent counted workout (RFC 3339), or null
    pub last_workout_date: Option<String>,
}

impl From<StatsRecord> for StatsResponse {
    fn from(record: StatsRecord) -> Self {
        Self {
            current_streak: record.current_streak,
            best_streak: record.best_streak,
            total_workouts: record.total_workouts,
            last_workout_date: record.last_workout_date.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Request body for replacing the statistics record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceStatsBody {
    /// Consecutive-day count ending at the last workout date
    #[serde(default)]
    pub current_streak: u32,
    /// Best consecutive-day count ever achieved
    #[serde(default)]
    pub best_streak: u32,
    /// Total number of logged workouts
    #[serde(default)]
    pub total_workouts: u32,
    /// Date of the most recent counted workout, or null
    #[serde(default)]
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl From<ReplaceStatsBody> for StatsRecord {
    fn from(body: ReplaceStatsBody) -> Self {
        Self {
            current_streak: body.current_streak,
            best_streak: body.best_streak,
            total_workouts: body.total_workouts,
            last_workout_date: body.last_workout_date,
        }
    }
}

/// Statistics routes handler
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user-stats", get(Self::handle_get))
            .route("/api/user-stats", put(Self::handle_replace))
            .with_state(resources)
    }

    /// Handle GET /api/user-stats - Read the statistics record
    ///
    /// Creates the zero-valued default on first access.
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let record = stats::get_stats(&resources.database).await?;

        let response: StatsResponse = record.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /api/user-stats - Replace the statistics record
    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<ReplaceStatsBody>,
    ) -> Result<Response, AppError> {
        let record: StatsRecord = body.into();
        let stored = stats::replace_stats(&resources.database, record).await?;

        let response: StatsResponse = stored.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
