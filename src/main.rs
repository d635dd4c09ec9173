// Week Planner Application
// Main entry point

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use std::time::Duration;

use week_planner::models::event::Event;
use week_planner::models::goal::Goal;
use week_planner::services::api::HttpPlannerApi;
use week_planner::services::placement::events_in_cell;
use week_planner::services::settings::Settings;
use week_planner::services::slot::{week_days, Slot, HOURS_PER_DAY};
use week_planner::services::store::StateStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Planner");

    let settings_path = Settings::default_path()?;
    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    };

    let api = HttpPlannerApi::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
    .context("Failed to build the document store client")?;

    let mut store = StateStore::new(api);
    store
        .fetch_events()
        .await
        .context("Could not fetch events from the document store")?;
    store
        .fetch_goals()
        .await
        .context("Could not fetch goals from the document store")?;

    print_goals(store.goals());
    print_week(store.events(), settings.first_day_of_week);

    Ok(())
}

fn print_goals(goals: &[Goal]) {
    if goals.is_empty() {
        return;
    }
    println!("Goals");
    for goal in goals {
        println!("  {} [{}]", goal.name, goal.color);
        for task in &goal.tasks {
            let mark = if task.completed { "x" } else { " " };
            println!("    [{}] {}", mark, task.name);
        }
    }
    println!();
}

fn print_week(events: &[Event], first_day_of_week: u8) {
    let today = Local::now().date_naive();

    for day in week_days(today, first_day_of_week) {
        println!("{}", day.format("%A %Y-%m-%d"));

        for hour in 0..HOURS_PER_DAY {
            let Ok(slot) = Slot::new(day, hour) else {
                continue;
            };
            for event in events_in_cell(events, &slot) {
                // Multi-hour events occupy every intersected row; print
                // each block once, at its start row.
                if event.start.hour() == hour {
                    println!(
                        "  {}-{}  {} [{}]",
                        event.start.format("%H:%M"),
                        event.end.format("%H:%M"),
                        event.title,
                        event.display_color(),
                    );
                }
            }
        }
    }
}
