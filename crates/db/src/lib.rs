pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::info;

pub type DbPool = Pool<Postgres>;

/// Opens the PostgreSQL pool shared by the repositories.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to the planning database")?;

    info!("Connected to the planning database");
    Ok(pool)
}
