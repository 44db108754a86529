// ABOUTME: Route module organization for the fitlog server HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the fitlog server
//!
//! This module organizes all HTTP routes by domain for better maintainability
//! and clear separation of concerns. Each domain module contains only route
//! definitions and thin handler functions that delegate to service layers.

/// Health check and system status routes
pub mod health;
/// Weekly workout plan routes
pub mod plans;
/// Streak statistics routes
pub mod stats;
/// Workout log routes
pub mod workouts;

/// Health check route handlers
pub use health::HealthRoutes;
/// Weekly plan route handlers
pub use plans::PlanRoutes;
/// Statistics route handlers
pub use stats::StatsRoutes;
/// Workout log route handlers
pub use workouts::WorkoutRoutes;
