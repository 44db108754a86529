// ABOUTME: System-wide constants and configuration values for the fitlog server
// ABOUTME: Contains server identity, environment defaults, and validation bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

use std::env;

/// Server identity constants
pub mod server {
    use std::env;

    /// Get server name from environment or default
    #[must_use]
    pub fn server_name() -> String {
        env::var("SERVER_NAME").unwrap_or_else(|_| SERVER_NAME.into())
    }

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default server name
    pub const SERVER_NAME: &str = "fitlog-server";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| crate::constants::ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(crate::constants::ports::DEFAULT_HTTP_PORT)
    }

    /// Get database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/fitlog.db".into())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into())
    }

    /// Get log format from environment or default
    #[must_use]
    pub fn log_format() -> String {
        env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".into())
    }
}

/// Network port constants
pub mod ports {
    /// Default `HTTP` server port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Operational limits
pub mod limits {
    /// Maximum attempts for the stats read-modify-write before giving up
    pub const STATS_UPDATE_MAX_ATTEMPTS: u32 = 3;
}

/// Validation bounds for workout and plan fields
pub mod validation {
    /// Minimum workout intensity
    pub const INTENSITY_MIN: u32 = 1;
    /// Maximum workout intensity
    pub const INTENSITY_MAX: u32 = 10;
    /// Minimum workout duration in minutes
    pub const DURATION_MIN_MINUTES: u32 = 1;
    /// Minimum calories for a logged workout
    pub const CALORIES_MIN: u32 = 1;
    /// Highest valid day-of-week index (0 = Sunday)
    pub const DAY_OF_WEEK_MAX: u32 = 6;
    /// Lowest valid plan week number
    pub const WEEK_MIN: u32 = 1;
}
