//! Prints the planning of the current week, one day per line, as seen by
//! the planning client.
//!
//! An optional argument picks another week: `planner 2022-08-25`.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Weekday};
use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use planning_client::{ClientConfig, Day, HttpPlanningSource, PlanningLogicManager};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env()?;
    info!("Reading planning from {} ({})", config.api_url, config.timezone);

    let source = HttpPlanningSource::new(&config.api_url);
    let mut manager = PlanningLogicManager::new(source, config.timezone);

    match std::env::args().nth(1) {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .wrap_err_with(|| format!("Invalid date {}, expected YYYY-MM-DD", raw))?;
            let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
            let timezone = manager.timezone();
            let noon = timezone
                .from_local_datetime(&date.and_time(noon))
                .earliest()
                .ok_or_else(|| eyre!("{} has no noon in {}", raw, timezone))?;
            manager.set_week(noon).await?;
        }
        None => manager.reset_to_today().await?,
    }

    // Rewind to Monday so the whole ISO week is printed
    while manager.current_week().weekday() != Weekday::Mon {
        manager.previous_day().await?;
    }

    print_day(&manager.current_day());
    for _ in 0..6 {
        print_day(&manager.next_day().await?);
    }

    Ok(())
}

fn print_day(day: &Day) {
    println!("{}", day.day_name);

    for disponibility in &day.disponibilities {
        println!(
            "  open {} - {}",
            disponibility.opening_time.format("%H:%M"),
            disponibility.closing_time.format("%H:%M")
        );
    }

    for reservation in &day.reservations {
        println!(
            "  {} - {}  {} ({})",
            reservation.start.format("%H:%M"),
            reservation.end.format("%H:%M"),
            reservation.title,
            reservation.owner_id
        );
    }

    if day.disponibilities.is_empty() && day.reservations.is_empty() {
        println!("  -");
    }
}
