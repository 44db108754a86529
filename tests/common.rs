// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, config, and server resource helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `fitlog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use fitlog::{
    config::environment::{CorsConfig, DatabaseConfig, DatabaseUrl, LogLevel, ServerConfig},
    database_plugins::factory::Database,
    server::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database_url = "sqlite::memory:";
    let database = Database::new(database_url).await?;
    Ok(database)
}

/// File-backed test database for tests that exercise concurrent writers
///
/// In-memory databases give every pooled connection its own private copy,
/// so cross-connection tests need a real file. The returned `TempDir` must
/// stay alive for the duration of the test.
pub async fn create_file_test_database() -> Result<(Database, tempfile::TempDir)> {
    init_test_logging();
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("fitlog_test.db");
    let database_url = format!("sqlite:{}", db_path.display());
    let database = Database::new(&database_url).await?;
    Ok((database, temp_dir))
}

/// Standard test configuration
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8081,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Create test `ServerResources` backed by an in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let config = Arc::new(create_test_config());
    Ok(Arc::new(ServerResources::new(database, config)))
}
