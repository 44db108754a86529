// ABOUTME: Core data models and types for the fitlog backend
// ABOUTME: Defines Workout, PlanEntry, StatsRecord and the request structs shared by services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! This module contains the core data structures used throughout the fitlog server.
//!
//! ## Core Models
//!
//! - `Workout`: a single logged workout with its server-assigned occurrence date
//! - `PlanEntry`: one day of the rolling weekly workout plan
//! - `StatsRecord`: the singleton streak statistics record
//! - `WorkoutType` / `PlanStatus`: closed string enumerations with database forms

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Category of a logged workout
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Resistance or weight training
    Strength,
    /// Endurance work (running, cycling, swimming)
    Cardio,
    /// Stretching, yoga, mobility
    Flexibility,
    /// Team or racket sports
    Sports,
    /// Anything that does not fit the other categories
    Other,
}

impl WorkoutType {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "sports" => Ok(Self::Sports),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("Invalid workout type: {s}")).into()),
        }
    }
}

impl Display for WorkoutType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Scheduling status of a weekly plan entry
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Scheduled for the current day
    Today,
    /// Already performed this week
    Completed,
    /// Scheduled later in the week
    Upcoming,
    /// Deliberate rest day
    Rest,
    /// Movable slot without a fixed day commitment
    Flexible,
}

impl PlanStatus {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
            Self::Rest => "rest",
            Self::Flexible => "flexible",
        }
    }
}

impl Default for PlanStatus {
    fn default() -> Self {
        Self::Upcoming
    }
}

impl FromStr for PlanStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "completed" => Ok(Self::Completed),
            "upcoming" => Ok(Self::Upcoming),
            "rest" => Ok(Self::Rest),
            "flexible" => Ok(Self::Flexible),
            _ => Err(AppError::invalid_input(format!("Invalid plan status: {s}")).into()),
        }
    }
}

impl Display for PlanStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A single logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Workout name (e.g. "Morning Cardio")
    pub name: String,
    /// Workout category
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Perceived intensity on a 1-10 scale
    pub intensity: u32,
    /// Calories burned
    pub calories: u32,
    /// Occurrence timestamp, assigned by the server at creation (UTC)
    pub date: DateTime<Utc>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercise names performed during the workout
    pub exercises: Vec<String>,
}

/// Fields accepted when creating a workout
///
/// The occurrence date is never part of this request; the server assigns
/// `Utc::now()` when the row is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Workout name
    pub name: String,
    /// Workout category as its string form
    pub workout_type: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Perceived intensity on a 1-10 scale
    pub intensity: u32,
    /// Calories burned
    pub calories: u32,
    /// Free-form notes
    pub notes: Option<String>,
    /// Exercise names performed during the workout
    pub exercises: Vec<String>,
}

/// Fields accepted when updating a workout
///
/// Only the listed fields are mutable; the occurrence date and exercise list
/// are fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    /// New name (if provided)
    pub name: Option<String>,
    /// New category (if provided)
    pub workout_type: Option<String>,
    /// New duration in minutes (if provided)
    pub duration_minutes: Option<u32>,
    /// New intensity (if provided)
    pub intensity: Option<u32>,
    /// New calories (if provided)
    pub calories: Option<u32>,
    /// New notes (if provided)
    pub notes: Option<String>,
}

/// One day of the rolling weekly workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: u32,
    /// Plan entry name (e.g. "Upper Body Strength")
    pub name: String,
    /// Planned duration in minutes (0 for rest days)
    pub duration_minutes: u32,
    /// Number of exercises planned
    pub exercise_count: u32,
    /// Focus areas (e.g. "chest", "core")
    pub focus_areas: Vec<String>,
    /// Scheduling status
    pub status: PlanStatus,
    /// Week number the plan belongs to
    pub week: u32,
}

/// Fields accepted when creating a plan entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: u32,
    /// Plan entry name
    pub name: String,
    /// Planned duration in minutes
    pub duration_minutes: u32,
    /// Number of exercises planned
    pub exercise_count: u32,
    /// Focus areas
    pub focus_areas: Vec<String>,
    /// Scheduling status as its string form; defaults to `upcoming`
    pub status: Option<String>,
    /// Week number; defaults to 1
    pub week: Option<u32>,
}

/// Fields accepted when updating a plan entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    /// New day of week (if provided)
    pub day_of_week: Option<u32>,
    /// New name (if provided)
    pub name: Option<String>,
    /// New duration in minutes (if provided)
    pub duration_minutes: Option<u32>,
    /// New exercise count (if provided)
    pub exercise_count: Option<u32>,
    /// New focus areas (if provided)
    pub focus_areas: Option<Vec<String>>,
    /// New status (if provided)
    pub status: Option<String>,
    /// New week number (if provided)
    pub week: Option<u32>,
}

/// The singleton streak statistics record
///
/// Exactly one logical instance exists; it is created lazily with zero
/// values on first access and mutated once per ingested workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsRecord {
    /// Consecutive-day count ending at `last_workout_date`
    pub current_streak: u32,
    /// Maximum `current_streak` ever observed
    pub best_streak: u32,
    /// Count of ingested workouts; never decreases
    pub total_workouts: u32,
    /// Date of the most recent counted workout; `None` before the first
    pub last_workout_date: Option<DateTime<Utc>>,
}

/// Aggregate over workouts logged since a cutoff date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivitySummary {
    /// Start of the summarized window (inclusive)
    pub since: DateTime<Utc>,
    /// Number of workouts logged in the window
    pub workout_count: u32,
    /// Total calories burned in the window
    pub total_calories: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_round_trip() {
        for raw in ["strength", "cardio", "flexibility", "sports", "other"] {
            let parsed: WorkoutType = raw.parse().unwrap();
            assert_eq!(parsed.as_str(), raw);
        }
    }

    #[test]
    fn test_workout_type_rejects_unknown() {
        assert!("swimming".parse::<WorkoutType>().is_err());
        assert!("".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn test_plan_status_default_is_upcoming() {
        assert_eq!(PlanStatus::default(), PlanStatus::Upcoming);
    }

    #[test]
    fn test_stats_record_default_is_zeroed() {
        let stats = StatsRecord::default();
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 0);
        assert_eq!(stats.total_workouts, 0);
        assert!(stats.last_workout_date.is_none());
    }
}
