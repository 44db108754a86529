// ABOUTME: Pure streak derivation logic applied once per ingested workout
// ABOUTME: Computes current streak, best streak, and workout totals from calendar-day differences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Streak Calculator
//!
//! Pure functions that derive the next statistics record from the previous
//! one and the occurrence date of a newly ingested workout. Persistence and
//! retry concerns live in the stats service; nothing here performs I/O.
//!
//! Day comparisons use calendar dates only. Two workouts at 00:05 and 23:55
//! of the same day are the same day; 23:55 followed by 00:05 the next day is
//! a one-day step even though the instants are ten minutes apart.

use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::StatsRecord;

/// Whole calendar days from `earlier` to `later`, ignoring time of day
///
/// Negative when `later` falls on an earlier calendar date.
#[must_use]
pub fn calendar_day_diff(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later.date_naive() - earlier.date_naive()).num_days()
}

/// Apply one workout occurrence to a statistics record
///
/// Returns the successor record. The total workout count always grows by
/// one; the streak fields depend on the calendar-day difference between the
/// record's last workout date and `workout_date`:
///
/// - no previous workout: the streak starts at 1
/// - same calendar day: streak fields are unchanged
/// - next calendar day: the current streak extends by one
/// - a gap of two or more days: the current streak restarts at 1
///
/// The best streak never decreases. The last workout date is set to
/// `workout_date` on every accepted call.
///
/// # Errors
///
/// Returns `InvalidInput` when `workout_date` falls on a calendar day before
/// the recorded last workout date. Backdated submissions are rejected rather
/// than treated as a gap, keeping the last workout date monotone.
pub fn apply_workout(stats: &StatsRecord, workout_date: DateTime<Utc>) -> AppResult<StatsRecord> {
    let mut next = stats.clone();
    next.total_workouts = stats.total_workouts.saturating_add(1);

    match stats.last_workout_date {
        None => {
            next.current_streak = 1;
            next.best_streak = stats.best_streak.max(1);
        }
        Some(last) => match calendar_day_diff(last, workout_date) {
            0 => {}
            1 => {
                next.current_streak = stats.current_streak.saturating_add(1);
                next.best_streak = next.best_streak.max(next.current_streak);
            }
            diff if diff > 1 => {
                next.current_streak = 1;
                next.best_streak = next.best_streak.max(1);
            }
            _ => {
                return Err(AppError::invalid_input(format!(
                    "Workout date {workout_date} precedes last recorded workout {last}"
                )));
            }
        },
    }

    next.last_workout_date = Some(workout_date);
    Ok(next)
}
