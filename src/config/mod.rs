// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Exposes environment-driven configuration types used across the fitlog server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the fitlog server
//!
//! Provides centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

// Re-export main configuration types from environment
pub use environment::{CorsConfig, DatabaseConfig, DatabaseUrl, LogLevel, ServerConfig};
