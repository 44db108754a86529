// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Provides storage-agnostic workout, plan, and statistics operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! This module contains storage-agnostic business logic extracted from route
//! handlers. Services work against any [`crate::database_plugins::DatabaseProvider`]
//! implementation, so the same rules apply regardless of the entry point.

/// Weekly plan operations: validation and CRUD over plan entries
pub mod plans;

/// Streak statistics operations: lazy singleton access and atomic workout ingestion
pub mod stats;

/// Workout log operations: validation, creation with stats ingestion, summaries
pub mod workouts;
