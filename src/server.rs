// ABOUTME: HTTP server assembly for the fitlog backend
// ABOUTME: Shared resource container, router composition, and the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server composition
//!
//! [`ServerResources`] bundles everything handlers share; [`FitlogServer`]
//! composes the domain routers, applies middleware, and drives the listener
//! until shutdown.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, PlanRoutes, StatsRoutes, WorkoutRoutes};

/// Shared server resources handed to every route handler
#[derive(Clone)]
pub struct ServerResources {
    /// Active database backend
    pub database: Database,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub const fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self { database, config }
    }
}

/// The fitlog HTTP server
pub struct FitlogServer {
    resources: Arc<ServerResources>,
}

impl FitlogServer {
    /// Create a new server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Compose the full application router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(WorkoutRoutes::routes(self.resources.clone()))
            .merge(PlanRoutes::routes(self.resources.clone()))
            .merge(StatsRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config))
    }

    /// Run the server until the listener fails or a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the serve loop fails
    pub async fn run(&self, port: u16) -> Result<()> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let router = self.router();

        let listener = tokio::net::TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {host}:{port}"))?;

        info!("HTTP server listening on http://{host}:{port}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    } else {
        info!("Shutdown signal received, draining connections");
    }
}
