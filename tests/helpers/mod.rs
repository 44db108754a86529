// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports HTTP request builders for exercising axum routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod conflict_db;
