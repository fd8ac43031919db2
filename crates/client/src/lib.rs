//! # Planning Client
//!
//! Client side of the planning service: fetches disponibilities and
//! reservations from the API and keeps a navigable, day-bucketed view of
//! the week under a cursor.
//!
//! ```no_run
//! use planning_client::{ClientConfig, HttpPlanningSource, PlanningLogicManager};
//!
//! # async fn run() -> eyre::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let source = HttpPlanningSource::new(&config.api_url);
//! let mut manager = PlanningLogicManager::new(source, config.timezone);
//!
//! manager.reset_to_today().await?;
//! let today = manager.current_day();
//! println!("{}: {} reservations", today.day_name, today.reservations.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod source;

pub use config::ClientConfig;
pub use manager::{Day, PlannedDisponibility, PlannedReservation, PlanningLogicManager};
pub use source::{HttpPlanningSource, PlanningSource};
