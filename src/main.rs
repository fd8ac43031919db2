use color_eyre::eyre::Result;
use dotenv::dotenv;
use planning_api::config::ApiConfig;
use planning_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    let db_pool = create_pool(&config.database_url).await?;

    // Tables are created on first start, later starts leave them untouched
    initialize_database(&db_pool).await?;

    planning_api::start_server(config, db_pool).await?;

    Ok(())
}
