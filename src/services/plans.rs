// ABOUTME: Weekly plan business logic extracted from route handlers
// ABOUTME: Field validation and CRUD over the rolling weekly plan entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Weekly plan service
//!
//! Plan entries describe the intended week of training. They are purely
//! declarative: completing or skipping a planned day never feeds into the
//! streak statistics, only logged workouts do.

use std::str::FromStr;

use tracing::debug;
use uuid::Uuid;

use crate::constants::validation;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CreatePlanRequest, PlanEntry, PlanStatus, UpdatePlanRequest};

/// Validate and store a new plan entry
///
/// # Errors
///
/// Returns a validation error for an out-of-range day or week, an unknown
/// status, or an empty name, or a database error if the row cannot be stored
pub async fn create_plan<DB: DatabaseProvider>(
    database: &DB,
    request: CreatePlanRequest,
) -> AppResult<PlanEntry> {
    let name = normalize_name(&request.name)?;
    validate_day_of_week(request.day_of_week)?;

    let status = match request.status {
        Some(raw) => parse_plan_status(&raw)?,
        None => PlanStatus::default(),
    };

    let week = request.week.unwrap_or(validation::WEEK_MIN);
    validate_week(week)?;

    let entry = PlanEntry {
        id: Uuid::new_v4(),
        day_of_week: request.day_of_week,
        name,
        duration_minutes: request.duration_minutes,
        exercise_count: request.exercise_count,
        focus_areas: request.focus_areas,
        status,
        week,
    };

    database
        .create_plan(&entry)
        .await
        .map_err(|e| AppError::database(format!("Failed to store plan entry: {e}")))?;

    debug!(plan_id = %entry.id, day_of_week = entry.day_of_week, "Plan entry created");
    Ok(entry)
}

/// Get a plan entry by ID
///
/// # Errors
///
/// Returns `ResourceNotFound` if no plan entry has this ID, or a database error
pub async fn get_plan<DB: DatabaseProvider>(database: &DB, plan_id: Uuid) -> AppResult<PlanEntry> {
    database
        .get_plan(plan_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to load plan entry {plan_id}: {e}")))?
        .ok_or_else(|| {
            AppError::not_found(format!("Plan entry {plan_id}")).with_resource_id(plan_id.to_string())
        })
}

/// List all plan entries ordered by week, then day of week
///
/// # Errors
///
/// Returns a database error if the plan cannot be read
pub async fn list_plans<DB: DatabaseProvider>(database: &DB) -> AppResult<Vec<PlanEntry>> {
    database
        .get_plans()
        .await
        .map_err(|e| AppError::database(format!("Failed to list plan entries: {e}")))
}

/// Update an existing plan entry
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID, a validation error for
/// out-of-range replacement values, or a database error
pub async fn update_plan<DB: DatabaseProvider>(
    database: &DB,
    plan_id: Uuid,
    request: UpdatePlanRequest,
) -> AppResult<PlanEntry> {
    let mut entry = get_plan(database, plan_id).await?;

    if let Some(day_of_week) = request.day_of_week {
        validate_day_of_week(day_of_week)?;
        entry.day_of_week = day_of_week;
    }
    if let Some(name) = request.name {
        entry.name = normalize_name(&name)?;
    }
    if let Some(duration) = request.duration_minutes {
        entry.duration_minutes = duration;
    }
    if let Some(exercise_count) = request.exercise_count {
        entry.exercise_count = exercise_count;
    }
    if let Some(focus_areas) = request.focus_areas {
        entry.focus_areas = focus_areas;
    }
    if let Some(raw) = request.status {
        entry.status = parse_plan_status(&raw)?;
    }
    if let Some(week) = request.week {
        validate_week(week)?;
        entry.week = week;
    }

    database
        .update_plan(&entry)
        .await
        .map_err(|e| AppError::database(format!("Failed to update plan entry {plan_id}: {e}")))?;

    Ok(entry)
}

/// Delete a plan entry by ID
///
/// # Errors
///
/// Returns `ResourceNotFound` if no plan entry has this ID, or a database error
pub async fn delete_plan<DB: DatabaseProvider>(database: &DB, plan_id: Uuid) -> AppResult<()> {
    let removed = database
        .delete_plan(plan_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete plan entry {plan_id}: {e}")))?;

    if removed {
        Ok(())
    } else {
        Err(AppError::not_found(format!("Plan entry {plan_id}"))
            .with_resource_id(plan_id.to_string()))
    }
}

/// Trim a plan entry name and reject empty results
fn normalize_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Plan entry name is required",
        ));
    }
    Ok(trimmed.to_owned())
}

/// Parse a plan status from its request string form
fn parse_plan_status(raw: &str) -> AppResult<PlanStatus> {
    PlanStatus::from_str(raw).map_err(|_| {
        AppError::invalid_input(format!(
            "Invalid plan status '{raw}', expected one of: today, completed, upcoming, rest, flexible"
        ))
    })
}

/// Check a day-of-week index against the 0..=6 range
fn validate_day_of_week(day_of_week: u32) -> AppResult<()> {
    if day_of_week > validation::DAY_OF_WEEK_MAX {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!(
                "Day of week must be between 0 and {}",
                validation::DAY_OF_WEEK_MAX
            ),
        ));
    }
    Ok(())
}

/// Check a week number against its lower bound
fn validate_week(week: u32) -> AppResult<()> {
    if week < validation::WEEK_MIN {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Week must be at least {}", validation::WEEK_MIN),
        ));
    }
    Ok(())
}
