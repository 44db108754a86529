// ABOUTME: Demo data seeder for the fitlog backend
// ABOUTME: Populates sample workouts, a weekly plan, and starting statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Demo data seeder for the fitlog server.
//!
//! This binary populates the database with a week of sample workouts, a
//! weekly plan, and starting streak statistics for frontend testing.
//!
//! Usage:
//! ```bash
//! # Seed with default settings (uses DATABASE_URL from environment)
//! cargo run --bin seed-demo-data
//!
//! # Override database URL
//! cargo run --bin seed-demo-data -- --database-url sqlite:./data/fitlog.db
//!
//! # Force re-seed even if workouts already exist
//! cargo run --bin seed-demo-data -- --force
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use fitlog::database_plugins::{factory::Database, DatabaseProvider};
use fitlog::models::{PlanEntry, PlanStatus, StatsRecord, Workout, WorkoutType};
use std::env;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Fitlog Demo Data Seeder",
    long_about = "Populate the database with sample workouts, plan entries, and statistics"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if workouts already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Demo workout definition
struct DemoWorkout {
    name: &'static str,
    workout_type: WorkoutType,
    duration_minutes: u32,
    intensity: u32,
    calories: u32,
    notes: &'static str,
    exercises: &'static [&'static str],
    days_ago: i64,
}

/// Demo plan entry definition
struct DemoPlanEntry {
    day_of_week: u32,
    name: &'static str,
    duration_minutes: u32,
    exercise_count: u32,
    focus_areas: &'static [&'static str],
    status: PlanStatus,
}

/// Sample workouts covering the previous week
const DEMO_WORKOUTS: &[DemoWorkout] = &[
    DemoWorkout {
        name: "Morning Cardio",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 30,
        intensity: 7,
        calories: 250,
        notes: "Great morning run",
        exercises: &["Running", "Cool down walk"],
        days_ago: 1,
    },
    DemoWorkout {
        name: "Strength Training",
        workout_type: WorkoutType::Strength,
        duration_minutes: 45,
        intensity: 8,
        calories: 320,
        notes: "Upper body focus",
        exercises: &["Push-ups", "Pull-ups", "Bench press", "Shoulder press"],
        days_ago: 2,
    },
    DemoWorkout {
        name: "Yoga Flow",
        workout_type: WorkoutType::Flexibility,
        duration_minutes: 60,
        intensity: 4,
        calories: 180,
        notes: "Relaxing session",
        exercises: &["Sun salutation", "Warrior poses", "Downward dog", "Savasana"],
        days_ago: 3,
    },
    DemoWorkout {
        name: "HIIT Workout",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 25,
        intensity: 9,
        calories: 400,
        notes: "Intense session!",
        exercises: &["Burpees", "Jump squats", "Mountain climbers", "High knees"],
        days_ago: 4,
    },
    DemoWorkout {
        name: "Swimming",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 40,
        intensity: 6,
        calories: 290,
        notes: "Pool session",
        exercises: &["Freestyle", "Backstroke", "Water jogging"],
        days_ago: 5,
    },
    DemoWorkout {
        name: "Lower Body Strength",
        workout_type: WorkoutType::Strength,
        duration_minutes: 50,
        intensity: 8,
        calories: 350,
        notes: "Leg day complete",
        exercises: &["Squats", "Deadlifts", "Lunges", "Calf raises"],
        days_ago: 6,
    },
    DemoWorkout {
        name: "Evening Walk",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 35,
        intensity: 3,
        calories: 150,
        notes: "Peaceful evening",
        exercises: &["Brisk walking", "Light stretching"],
        days_ago: 7,
    },
];

/// Sample weekly plan, one entry per training day
const DEMO_PLAN: &[DemoPlanEntry] = &[
    DemoPlanEntry {
        day_of_week: 1,
        name: "Upper Body Strength",
        duration_minutes: 45,
        exercise_count: 6,
        focus_areas: &["Chest", "Back", "Arms"],
        status: PlanStatus::Today,
    },
    DemoPlanEntry {
        day_of_week: 2,
        name: "Active Recovery",
        duration_minutes: 20,
        exercise_count: 0,
        focus_areas: &["Stretching"],
        status: PlanStatus::Rest,
    },
    DemoPlanEntry {
        day_of_week: 3,
        name: "Lower Body Power",
        duration_minutes: 50,
        exercise_count: 7,
        focus_areas: &["Legs", "Glutes", "Core"],
        status: PlanStatus::Upcoming,
    },
    DemoPlanEntry {
        day_of_week: 4,
        name: "Cardio Intervals",
        duration_minutes: 35,
        exercise_count: 5,
        focus_areas: &["Cardio", "Endurance"],
        status: PlanStatus::Upcoming,
    },
    DemoPlanEntry {
        day_of_week: 5,
        name: "Full Body Circuit",
        duration_minutes: 40,
        exercise_count: 8,
        focus_areas: &["Full Body", "Functional"],
        status: PlanStatus::Upcoming,
    },
    DemoPlanEntry {
        day_of_week: 6,
        name: "Outdoor Activity",
        duration_minutes: 60,
        exercise_count: 0,
        focus_areas: &["Cardio", "Recreation"],
        status: PlanStatus::Flexible,
    },
];

/// Plan entries are seeded into week 3 of the program
const DEMO_PLAN_WEEK: u32 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Fitlog Demo Data Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/fitlog.db".into());

    // Connect through the provider so schema migrations run first
    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    // Check if demo data already exists
    let existing = database.get_workouts().await?;
    if !existing.is_empty() && !args.force {
        info!(
            "Workouts already present ({} found). Use --force to seed anyway.",
            existing.len()
        );
        return Ok(());
    }

    info!("Step 1: Creating sample workouts...");
    let workout_count = seed_workouts(&database).await?;
    info!("  Created {} workouts", workout_count);

    info!("Step 2: Creating weekly plan...");
    let plan_count = seed_plan(&database).await?;
    info!("  Created {} plan entries", plan_count);

    info!("Step 3: Setting starting statistics...");
    let stats = seed_stats(&database).await?;
    info!(
        "  Statistics set: streak {} (best {}), {} total workouts",
        stats.current_streak, stats.best_streak, stats.total_workouts
    );

    info!("");
    info!("=== Seeding Complete ===");
    print_summary(&database).await?;

    Ok(())
}

/// Insert the sample workouts with dates spread over the previous week
async fn seed_workouts(database: &Database) -> Result<u32> {
    let now = Utc::now();
    let mut count = 0u32;

    for demo in DEMO_WORKOUTS {
        let workout = Workout {
            id: Uuid::new_v4(),
            name: demo.name.to_owned(),
            workout_type: demo.workout_type,
            duration_minutes: demo.duration_minutes,
            intensity: demo.intensity,
            calories: demo.calories,
            date: now - Duration::days(demo.days_ago),
            notes: Some(demo.notes.to_owned()),
            exercises: demo.exercises.iter().map(|e| (*e).to_owned()).collect(),
        };

        database.create_workout(&workout).await?;
        info!("  ✓ {}", demo.name);
        count += 1;
    }

    Ok(count)
}

/// Insert the weekly plan entries
async fn seed_plan(database: &Database) -> Result<u32> {
    let mut count = 0u32;

    for demo in DEMO_PLAN {
        let entry = PlanEntry {
            id: Uuid::new_v4(),
            day_of_week: demo.day_of_week,
            name: demo.name.to_owned(),
            duration_minutes: demo.duration_minutes,
            exercise_count: demo.exercise_count,
            focus_areas: demo.focus_areas.iter().map(|f| (*f).to_owned()).collect(),
            status: demo.status,
            week: DEMO_PLAN_WEEK,
        };

        database.create_plan(&entry).await?;
        info!("  ✓ Day {}: {}", demo.day_of_week, demo.name);
        count += 1;
    }

    Ok(count)
}

/// Set the starting statistics shown on the dashboard
async fn seed_stats(database: &Database) -> Result<StatsRecord> {
    let stats = StatsRecord {
        current_streak: 7,
        best_streak: 15,
        total_workouts: 42,
        last_workout_date: Some(Utc::now()),
    };

    database.update_stats(&stats).await
}

/// Print summary counts after seeding
async fn print_summary(database: &Database) -> Result<()> {
    let workouts = database.get_workouts().await?;
    let plans = database.get_plans().await?;
    let stats = database.get_or_create_stats().await?;

    info!("Workouts: {}", workouts.len());
    info!("Plan Entries: {}", plans.len());
    info!(
        "Statistics: streak {} / best {} / total {}",
        stats.current_streak, stats.best_streak, stats.total_workouts
    );
    info!("Done! Start the server to browse the demo data.");

    Ok(())
}
