//! CLI demo for the activity log.
//!
//! Fills in a couple of drafts through the form, logs the valid ones and
//! prints the running calorie balance.

use activity_log::{
    ActivityAction, ActivityForm, ActivityReducer, ActivityState, Category, FieldChange,
};
use shelf_core::environment::UuidGenerator;
use shelf_runtime::{Config, Store};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_log(state: &ActivityState) {
    if state.is_empty() {
        println!("  (nothing logged)");
        return;
    }
    for activity in state.activities() {
        println!(
            "  [{:<8}] {:<16} {:>5} kcal",
            activity.category, activity.name, activity.calories
        );
    }
    println!(
        "  consumed {} / burned {} / net {}",
        state.calories_consumed(),
        state.calories_burned(),
        state.net_calories()
    );
}

async fn submit(form: &mut ActivityForm, store: &Store<ActivityReducer>) {
    match form.submit() {
        Some(new_activity) => {
            println!("Logging '{}'", new_activity.name);
            store
                .send(ActivityAction::SaveActivity { new_activity })
                .await;
        }
        None => println!("Draft is not valid yet, nothing logged"),
    }
}

#[tokio::main]
async fn main() {
    // Load .env file
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    shelf_runtime::metrics::register_metrics();

    println!("=== Activity Log Example ===\n");

    let store = Store::restore(ActivityReducer::new(), (), Arc::new(config.storage()));

    println!("Restored log:");
    store.state(print_log).await;
    println!();

    let mut form = ActivityForm::new(Arc::new(UuidGenerator));

    // Calories but no name
    form.change(FieldChange::Calories(300));
    submit(&mut form, &store).await;

    form.change(FieldChange::Name("Orange juice".to_string()));
    submit(&mut form, &store).await;

    form.change(FieldChange::Category(Category::Exercise.id()));
    form.change(FieldChange::Name("Bike".to_string()));
    form.change(FieldChange::Calories(450));
    submit(&mut form, &store).await;

    println!("\nCurrent log:");
    store.state(print_log).await;

    println!("\nSnapshot saved to {}", config.data_dir.display());
    println!("\n=== Demo Complete ===");
}
