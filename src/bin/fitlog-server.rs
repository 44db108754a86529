// ABOUTME: Main server binary for the fitlog REST API
// ABOUTME: Loads configuration, connects storage, and serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Fitlog Server Binary
//!
//! This binary starts the fitlog REST API with workout logging, weekly plan
//! management, and derived streak statistics.

use anyhow::Result;
use clap::Parser;
use fitlog::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    logging,
    server::{FitlogServer, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line arguments for the server binary
#[derive(Parser)]
#[command(name = "fitlog-server")]
#[command(about = "Fitlog - Personal fitness logging REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args {
                http_port: None,
                database_url: None,
            }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Fitlog Server");
    info!("{}", config.summary());

    ensure_database_directory(&config)?;

    // Initialize database (runs schema migrations)
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );
    info!(
        "Database URL: {}",
        &config.database.url.to_connection_string()
    );

    // Create server resources and server
    let resources = Arc::new(ServerResources::new(database, Arc::new(config.clone())));
    let server = FitlogServer::new(resources);

    info!("Server starting on port {}", config.http_port);

    // Display all available API endpoints
    display_available_endpoints(&config);

    info!("Ready to log workouts!");

    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Create the parent directory for file-backed databases before connecting
fn ensure_database_directory(config: &ServerConfig) -> Result<()> {
    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    display_health_endpoints(&host, config.http_port);
    display_workout_endpoints(&host, config.http_port);
    display_plan_endpoints(&host, config.http_port);
    display_stats_endpoints(&host, config.http_port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_health_endpoints(host: &str, port: u16) {
    info!("Health & Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   API Health Check:  GET  http://{host}:{port}/api/health");
    info!("   Readiness Probe:   GET  http://{host}:{port}/ready");
}

#[allow(clippy::cognitive_complexity)]
fn display_workout_endpoints(host: &str, port: u16) {
    info!("Workout Log:");
    info!("   List Workouts:     GET  http://{host}:{port}/api/workouts");
    info!("   Record Workout:    POST http://{host}:{port}/api/workouts");
    info!("   Get Workout:       GET  http://{host}:{port}/api/workouts/{{id}}");
    info!("   Update Workout:    PUT  http://{host}:{port}/api/workouts/{{id}}");
    info!("   Delete Workout:    DELETE http://{host}:{port}/api/workouts/{{id}}");
}

#[allow(clippy::cognitive_complexity)]
fn display_plan_endpoints(host: &str, port: u16) {
    info!("Weekly Plan:");
    info!("   List Plan Entries: GET  http://{host}:{port}/api/workout-plans");
    info!("   Create Plan Entry: POST http://{host}:{port}/api/workout-plans");
    info!("   Get Plan Entry:    GET  http://{host}:{port}/api/workout-plans/{{id}}");
    info!("   Update Plan Entry: PUT  http://{host}:{port}/api/workout-plans/{{id}}");
    info!("   Delete Plan Entry: DELETE http://{host}:{port}/api/workout-plans/{{id}}");
}

#[allow(clippy::cognitive_complexity)]
fn display_stats_endpoints(host: &str, port: u16) {
    info!("Streak Statistics:");
    info!("   Get Statistics:     GET  http://{host}:{port}/api/user-stats");
    info!("   Replace Statistics: PUT  http://{host}:{port}/api/user-stats");
}
