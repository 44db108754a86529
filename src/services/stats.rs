// ABOUTME: Streak statistics business logic over the singleton statistics record
// ABOUTME: Lazy singleton access, guarded replacement, and retried atomic workout ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Statistics service
//!
//! The statistics record is a singleton: it is created lazily with zero values
//! on first access and afterwards mutated through [`record_workout`], which
//! performs an optimistic-lock read-modify-write so concurrent ingestions
//! never lose an update.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::constants::limits;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::StatsRecord;
use crate::streaks;

/// Get the statistics record, creating the zero-valued default if absent
///
/// # Errors
///
/// Returns a database error if the record cannot be loaded or created
pub async fn get_stats<DB: DatabaseProvider>(database: &DB) -> AppResult<StatsRecord> {
    database
        .get_or_create_stats()
        .await
        .map_err(|e| AppError::database(format!("Failed to load statistics: {e}")))
}

/// Replace the stored statistics record
///
/// Used for administrative resets and seeding; regular ingestion goes through
/// [`record_workout`] instead.
///
/// # Errors
///
/// Returns `InvalidInput` if the replacement would break the
/// best-at-least-current relation, or a database error if the write fails
pub async fn replace_stats<DB: DatabaseProvider>(
    database: &DB,
    record: StatsRecord,
) -> AppResult<StatsRecord> {
    if record.best_streak < record.current_streak {
        return Err(AppError::invalid_input(
            "Best streak cannot be less than current streak",
        ));
    }

    database
        .update_stats(&record)
        .await
        .map_err(|e| AppError::database(format!("Failed to store statistics: {e}")))
}

/// Fold one workout into the statistics record, retrying on version conflicts
///
/// Each attempt re-reads the latest stored record, derives the successor via
/// [`streaks::apply_workout`], and writes it back only if the stored version
/// is unchanged. A stale write never lands; after
/// [`limits::STATS_UPDATE_MAX_ATTEMPTS`] conflicts the operation surfaces
/// `StatsUnavailable`.
///
/// # Errors
///
/// Returns `InvalidInput` for a workout date older than the recorded last
/// workout, `StatsUnavailable` when every attempt hit a version conflict,
/// or a database error if storage fails outright
pub async fn record_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_date: DateTime<Utc>,
) -> AppResult<StatsRecord> {
    for attempt in 1..=limits::STATS_UPDATE_MAX_ATTEMPTS {
        match ingest_once(database, workout_date).await {
            Ok(stats) => return Ok(stats),
            Err(e) if e.code == ErrorCode::ConcurrentUpdateConflict => {
                warn!(
                    attempt,
                    max_attempts = limits::STATS_UPDATE_MAX_ATTEMPTS,
                    "Statistics version moved during update, retrying with fresh state"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::stats_unavailable(format!(
        "Statistics update failed after {} attempts",
        limits::STATS_UPDATE_MAX_ATTEMPTS
    )))
}

/// One optimistic-lock read-modify-write cycle
async fn ingest_once<DB: DatabaseProvider>(
    database: &DB,
    workout_date: DateTime<Utc>,
) -> AppResult<StatsRecord> {
    let (current, version) = database
        .get_stats_for_update()
        .await
        .map_err(|e| AppError::database(format!("Failed to load statistics: {e}")))?;

    let updated = streaks::apply_workout(&current, workout_date)?;

    let stored = database
        .try_update_stats(&updated, version)
        .await
        .map_err(|e| AppError::database(format!("Failed to store statistics: {e}")))?;

    if stored {
        Ok(updated)
    } else {
        Err(AppError::concurrent_update(
            "Statistics record changed since it was read",
        ))
    }
}
