// ABOUTME: HTTP middleware for cross-origin request handling
// ABOUTME: Provides CORS layer construction from server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP middleware for the fitlog server

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
