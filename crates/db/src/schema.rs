use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table; the id is chosen by the client
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id VARCHAR(100) PRIMARY KEY,
            first_name VARCHAR(100) NOT NULL,
            last_name VARCHAR(100) NOT NULL,
            display_name VARCHAR(200) NULL,
            admin BOOLEAN NOT NULL DEFAULT FALSE,
            member BOOLEAN NOT NULL DEFAULT FALSE,
            group_name VARCHAR(100) NOT NULL,
            year INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(100) NOT NULL,
            start_date TIMESTAMP NOT NULL,
            end_date TIMESTAMP NOT NULL,
            owner_id VARCHAR(100) NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_reservation_range CHECK (end_date > start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create disponibilities table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS disponibilities (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            day SMALLINT NOT NULL CHECK (day BETWEEN 0 AND 6),
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            openning_time DOUBLE PRECISION NOT NULL,
            closing_time DOUBLE PRECISION NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_disponibility_dates CHECK (end_date >= start_date),
            CONSTRAINT valid_disponibility_hours CHECK (closing_time > openning_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_reservations_owner_id ON reservations(owner_id)",
        "CREATE INDEX IF NOT EXISTS idx_reservations_start_date ON reservations(start_date)",
        "CREATE INDEX IF NOT EXISTS idx_disponibilities_dates ON disponibilities(start_date, end_date)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
