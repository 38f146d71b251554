//! Utility to set a user's height and daily goals in the database
//!
//! Usage: set_profile <height_cm> [calories protein carbs fat]

use fuelforge::config::Config;
use fuelforge::db;
use fuelforge::models::UserGoals;
use fuelforge::store::{RemoteStore, SqliteStore};

fn parse(name: &str, value: &str) -> Result<f64, Box<dyn std::error::Error>> {
    value
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number, got {:?}", name, value).into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 && args.len() != 5 {
        eprintln!("Usage: set_profile <height_cm> [calories protein carbs fat]");
        std::process::exit(2);
    }

    let config = Config::from_env()?;
    println!("Database path: {}", config.database_path.display());

    let database = db::open(&config.database_path)?;

    let store = SqliteStore::new(database, config.user_id.clone());

    let profile = store.upsert_profile(parse("height_cm", &args[0])?).await?;
    println!("Profile set for {}:", profile.user_id);
    if let Some(height) = profile.height_cm {
        println!("  Height: {} cm", height);
    }

    if args.len() == 5 {
        let goals = UserGoals {
            calories_goal: parse("calories", &args[1])?,
            protein_goal: parse("protein", &args[2])?,
            carbs_goal: parse("carbs", &args[3])?,
            fat_goal: parse("fat", &args[4])?,
        };
        let saved = store.upsert_goals(&goals).await?;
        println!("Goals set:");
        println!("  Calories: {} kcal", saved.calories_goal);
        println!("  Protein: {} g", saved.protein_goal);
        println!("  Carbs: {} g", saved.carbs_goal);
        println!("  Fat: {} g", saved.fat_goal);
    }

    Ok(())
}
