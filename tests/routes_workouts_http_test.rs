// ABOUTME: HTTP integration tests for workout log routes
// ABOUTME: Tests CRUD endpoints, validation envelopes, and the stats coupling on creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for workout log routes
//!
//! This test suite validates that all workout endpoints are correctly
//! registered in the router, speak the documented wire format, and surface
//! service errors through the JSON error envelope.

mod common;
mod helpers;

use fitlog::routes::workouts::WorkoutRoutes;
use helpers::axum_test::AxumTestRequest;
use serde_json::json;
use uuid::Uuid;

/// Get workout routes over fresh server resources
async fn workout_routes() -> axum::Router {
    let resources = common::create_test_server_resources().await.unwrap();
    WorkoutRoutes::routes(resources)
}

fn cardio_body() -> serde_json::Value {
    json!({
        "name": "Morning Cardio",
        "type": "cardio",
        "duration": 30,
        "intensity": 7,
        "calories": 250,
        "notes": "Felt strong",
        "exercises": ["Running", "Cool down walk"]
    })
}

// ============================================================================
// POST /api/workouts - Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_workout_success() {
    let app = workout_routes().await;

    let response = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json();
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["name"], "Morning Cardio");
    assert_eq!(body["type"], "cardio");
    assert_eq!(body["duration"], 30);
    assert_eq!(body["intensity"], 7);
    assert_eq!(body["calories"], 250);
    assert_eq!(body["notes"], "Felt strong");
    assert_eq!(body["exercises"][0], "Running");

    let date_str = body["date"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(date_str).is_ok());

    // Successful ingestion attaches the updated statistics, no error field
    assert_eq!(body["stats"]["totalWorkouts"], 1);
    assert_eq!(body["stats"]["currentStreak"], 1);
    assert_eq!(body["stats"]["bestStreak"], 1);
    assert!(body["stats"]["lastWorkoutDate"].is_string());
    assert!(body.get("statsError").is_none());
}

#[tokio::test]
async fn test_create_workout_optional_fields_default() {
    let app = workout_routes().await;

    let response = AxumTestRequest::post("/api/workouts")
        .json(&json!({
            "name": "Quick Session",
            "type": "strength",
            "duration": 20,
            "intensity": 5,
            "calories": 120
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json();
    assert_eq!(body["exercises"], json!([]));
    assert!(body.get("notes").is_none());
}

#[tokio::test]
async fn test_create_second_same_day_workout_grows_total_only() {
    let app = workout_routes().await;

    AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await;
    let response = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app)
        .await;

    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json();
    assert_eq!(body["stats"]["totalWorkouts"], 2);
    assert_eq!(body["stats"]["currentStreak"], 1);
}

#[tokio::test]
async fn test_create_workout_validation_envelopes() {
    let app = workout_routes().await;

    let mut blank_name = cardio_body();
    blank_name["name"] = json!("   ");
    let response = AxumTestRequest::post("/api/workouts")
        .json(&blank_name)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert!(body["error"]["message"].is_string());

    let mut unknown_type = cardio_body();
    unknown_type["type"] = json!("jogging");
    let response = AxumTestRequest::post("/api/workouts")
        .json(&unknown_type)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let mut too_intense = cardio_body();
    too_intense["intensity"] = json!(11);
    let response = AxumTestRequest::post("/api/workouts")
        .json(&too_intense)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");

    // Nothing was stored by the rejected requests
    let response = AxumTestRequest::get("/api/workouts").send(app).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// ============================================================================
// GET /api/workouts - Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_workouts_starts_empty() {
    let app = workout_routes().await;

    let response = AxumTestRequest::get("/api/workouts").send(app).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_workouts_returns_created_rows() {
    let app = workout_routes().await;

    AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await;
    let mut second = cardio_body();
    second["name"] = json!("Evening Walk");
    AxumTestRequest::post("/api/workouts")
        .json(&second)
        .send(app.clone())
        .await;

    let response = AxumTestRequest::get("/api/workouts").send(app).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// ============================================================================
// GET /api/workouts/:id - Retrieval Tests
// ============================================================================

#[tokio::test]
async fn test_get_workout_roundtrip() {
    let app = workout_routes().await;

    let created: serde_json::Value = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::get(&format!("/api/workouts/{id}"))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Morning Cardio");
    // The standalone row never carries the creation-time stats fields
    assert!(body.get("stats").is_none());
}

#[tokio::test]
async fn test_get_workout_not_found() {
    let app = workout_routes().await;

    let response = AxumTestRequest::get(&format!("/api/workouts/{}", Uuid::new_v4()))
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_get_workout_malformed_id_rejected() {
    let app = workout_routes().await;

    let response = AxumTestRequest::get("/api/workouts/not-a-uuid").send(app).await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// PUT /api/workouts/:id - Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_workout_success() {
    let app = workout_routes().await;

    let created: serde_json::Value = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::put(&format!("/api/workouts/{id}"))
        .json(&json!({"name": "Tempo Run", "intensity": 9}))
        .send(app.clone())
        .await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Tempo Run");
    assert_eq!(body["intensity"], 9);
    assert_eq!(body["duration"], 30);
    assert_eq!(body["date"], created["date"]);

    let stored: serde_json::Value = AxumTestRequest::get(&format!("/api/workouts/{id}"))
        .send(app)
        .await
        .json();
    assert_eq!(stored["name"], "Tempo Run");
}

#[tokio::test]
async fn test_update_workout_not_found() {
    let app = workout_routes().await;

    let response = AxumTestRequest::put(&format!("/api/workouts/{}", Uuid::new_v4()))
        .json(&json!({"name": "Ghost"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_update_workout_rejects_out_of_range() {
    let app = workout_routes().await;

    let created: serde_json::Value = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::put(&format!("/api/workouts/{id}"))
        .json(&json!({"duration": 0}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

// ============================================================================
// DELETE /api/workouts/:id - Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_workout_success_then_not_found() {
    let app = workout_routes().await;

    let created: serde_json::Value = AxumTestRequest::post("/api/workouts")
        .json(&cardio_body())
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = AxumTestRequest::delete(&format!("/api/workouts/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::get(&format!("/api/workouts/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    let response = AxumTestRequest::delete(&format!("/api/workouts/{id}"))
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
}
