//! FuelForge
//!
//! Prints today's dashboard for the configured user as JSON. With
//! `scan <image>` or `coach <message>` it calls the AI functions instead.

use std::sync::Arc;

use chrono::{Local, Timelike};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fuelforge::ai::{CoachChat, FoodRecognizer, HttpAiClient};
use fuelforge::build_info::{self, BuildInfo};
use fuelforge::config::Config;
use fuelforge::db;
use fuelforge::engine::WeightUnit;
use fuelforge::motivation::{self, Quote};
use fuelforge::store::{RemoteStore, SqliteStore};
use fuelforge::tracker::{DaySummary, MealDay, MealSummary, WeightJournal, WeightSummary};

#[derive(Serialize)]
struct Dashboard {
    greeting: &'static str,
    quote: &'static Quote,
    user_id: String,
    meals: Vec<MealSummary>,
    today: DaySummary,
    weight: WeightSummary,
    workouts_logged: usize,
}

async fn dashboard(store: Arc<SqliteStore>) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let now = Local::now();
    let today = now.date_naive();

    let meal_day = MealDay::load(store.clone(), today).await?;
    let goals = meal_day.goals().await?;
    let journal = WeightJournal::load(store.clone()).await?;
    let workouts = store.list_workout_logs().await?;

    Ok(Dashboard {
        greeting: motivation::greeting(now.hour()),
        quote: motivation::quote_for_day(today),
        user_id: store.user_id().to_string(),
        meals: meal_day.meal_summaries(),
        today: meal_day.summary(&goals),
        weight: journal.summary(WeightUnit::Kg),
        workouts_logged: workouts.len(),
    })
}

async fn run_ai_command(config: &Config, command: &str, arg: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ai_config = config
        .ai
        .as_ref()
        .ok_or("FUELFORGE_AI_BASE_URL is not set")?;
    let client = HttpAiClient::new(ai_config)?;

    let result = match command {
        "scan" => {
            let image = std::fs::read(arg)?;
            client
                .identify_food(&image)
                .await
                .map(|food| serde_json::to_string_pretty(&food))
        }
        _ => client.chat(arg, &[]).await.map(Ok),
    };

    match result {
        Ok(output) => println!("{}", output?),
        Err(e) => {
            tracing::warn!("AI call failed: {}", e);
            eprintln!("{}", e.user_message());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fuelforge=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!("{} starting", BuildInfo::current().label());

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [command, arg] = args.as_slice() {
        if command == "scan" || command == "coach" {
            return run_ai_command(&config, command, arg).await;
        }
    }
    if !args.is_empty() {
        eprintln!("Usage: fuelforge [scan <image> | coach <message>]");
        std::process::exit(2);
    }

    eprintln!("Database path: {}", config.database_path.display());

    let database = db::open(&config.database_path)?;

    let store = Arc::new(SqliteStore::new(database, config.user_id.clone()));
    let dashboard = dashboard(store).await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}
