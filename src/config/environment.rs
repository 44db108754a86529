// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, typed database URLs, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for the fitlog server

use crate::constants::env_config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages and above
    #[default]
    Info,
    /// Debug output and above
    Debug,
    /// Everything, including per-query traces
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// Full connection string
        connection_string: String,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Currently infallible; unrecognized schemes fall back to a `SQLite`
    /// file path so local invocations like `fitlog.db` keep working.
    pub fn parse_url(s: &str) -> Result<Self> {
        if s.starts_with("sqlite:") {
            let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Ok(Self::PostgreSQL {
                connection_string: s.to_owned(),
            })
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Check if this is a `PostgreSQL` database
    #[must_use]
    pub const fn is_postgresql(&self) -> bool {
        matches!(self, Self::PostgreSQL { .. })
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/fitlog.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Top-level server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Cross-origin resource sharing configuration
    pub cors: CorsConfig,
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: DatabaseUrl,
    /// Run schema migrations automatically on startup
    pub auto_migrate: bool,
}

/// Cross-origin resource sharing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*` for any origin
    pub allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds a value that
    /// fails to parse, or if validation rejects the resulting config.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),

            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_config::database_url())
                    .unwrap_or_else(|_| DatabaseUrl::default()),
                auto_migrate: env_var_or("AUTO_MIGRATE", "true")?
                    .parse()
                    .context("Invalid AUTO_MIGRATE value")?,
            },

            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*")?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be a non-zero port number"));
        }

        if self.database.url.is_memory() {
            warn!("In-memory database configured; data will be lost on shutdown");
        }

        if !self.database.auto_migrate {
            warn!("Automatic migrations disabled; the schema must already exist");
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitlog Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.log_level,
            if self.database.url.is_sqlite() {
                "SQLite"
            } else {
                "PostgreSQL"
            },
            self.database.auto_migrate,
            self.cors.allowed_origins
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing_falls_back_to_info() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
    }

    #[test]
    fn test_database_url_parsing() {
        let sqlite = DatabaseUrl::parse_url("sqlite:./data/fitlog.db").unwrap();
        assert!(sqlite.is_sqlite());
        assert!(!sqlite.is_memory());
        assert_eq!(sqlite.to_connection_string(), "sqlite:./data/fitlog.db");

        let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(memory.is_memory());
        assert_eq!(memory.to_connection_string(), "sqlite::memory:");

        let postgres = DatabaseUrl::parse_url("postgresql://localhost/fitlog").unwrap();
        assert!(postgres.is_postgresql());
        assert!(!postgres.is_sqlite());
    }

    #[test]
    fn test_bare_path_treated_as_sqlite_file() {
        let url = DatabaseUrl::parse_url("fitlog.db").unwrap();
        assert!(url.is_sqlite());
        assert_eq!(url.to_connection_string(), "sqlite:fitlog.db");
    }

    fn test_config(http_port: u16) -> ServerConfig {
        ServerConfig {
            http_port,
            log_level: LogLevel::Info,
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
                auto_migrate: true,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
        }
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        assert!(test_config(0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = test_config(8081);
        assert!(config.validate().is_ok());
        assert!(config.summary().contains("SQLite"));
    }
}
