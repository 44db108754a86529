// ABOUTME: Main library entry point for the fitlog backend
// ABOUTME: Provides workout logging, plan management, and streak statistics over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fitlog Server
//!
//! A personal fitness logging backend. Clients record workouts, manage a
//! weekly plan, and read derived streak statistics over a small REST API.
//!
//! ## Features
//!
//! - **Workout log**: Create, list, update, and delete workout entries
//! - **Weekly plan**: Day-by-day plan entries with status tracking
//! - **Streak statistics**: Current and best streaks derived from workout dates
//! - **Atomic updates**: Version-checked statistics writes with bounded retry
//!
//! ## Quick Start
//!
//! 1. Point `DATABASE_URL` at a `SQLite` file (or rely on the default)
//! 2. Start the server with the `fitlog-server` binary
//! 3. Optionally load sample data with `seed-demo-data`
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: Common data structures for workouts, plans, and statistics
//! - **Streaks**: Pure streak derivation over workout dates
//! - **Services**: Business logic between routes and storage
//! - **Routes**: `HTTP` handlers and wire-format types
//! - **Database plugins**: Storage abstraction with pluggable backends
//! - **Config**: Environment-driven configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog::config::environment::ServerConfig;
//! use fitlog::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Fitlog server configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

// These modules are used by binary crates (src/bin/) and integration tests (tests/).
// They must remain `pub` so external consumers can access them.

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// `SQLite` storage implementation
pub mod database;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for cross-origin requests
pub mod middleware;

/// Common data models for workouts, plans, and statistics
pub mod models;

/// `HTTP` routes for the REST API
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Domain service layer between routes and storage
pub mod services;

/// Streak derivation over workout dates
pub mod streaks;
