// ABOUTME: Database management for workout, plan, and statistics storage
// ABOUTME: Owns the sqlite pool and orchestrates per-domain schema migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! This module provides database functionality for the fitlog server.
//! It handles workout storage, weekly plan storage, and the singleton
//! statistics record with its optimistic-lock version column.

mod plans;
mod stats;
mod workouts;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for workout and statistics storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };

        // Run migrations
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails.
    pub async fn migrate(&self) -> Result<()> {
        // Statistics singleton
        self.migrate_stats().await?;

        // Workout log
        self.migrate_workouts().await?;

        // Weekly plan
        self.migrate_plans().await?;

        Ok(())
    }
}
