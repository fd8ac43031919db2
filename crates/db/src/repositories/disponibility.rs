use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use planning_core::models::disponibility::{Disponibility, DisponibilityDraft};
use uuid::Uuid;

use crate::{DbPool, models::DbDisponibility};

#[async_trait]
pub trait DisponibilityRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Disponibility>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Disponibility>>;

    async fn insert(&self, draft: &DisponibilityDraft) -> Result<Disponibility>;

    async fn update(&self, id: Uuid, draft: &DisponibilityDraft) -> Result<u64>;

    async fn delete_by_id(&self, id: Uuid) -> Result<u64>;
}

pub struct PgDisponibilityRepository {
    pool: DbPool,
}

impl PgDisponibilityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DisponibilityRepository for PgDisponibilityRepository {
    async fn find_all(&self) -> Result<Vec<Disponibility>> {
        let disponibilities = sqlx::query_as::<_, DbDisponibility>(
            r#"
            SELECT id, day, start_date, end_date, openning_time, closing_time, created_at, updated_at
            FROM disponibilities
            ORDER BY start_date ASC, day ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(disponibilities.into_iter().map(Disponibility::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Disponibility>> {
        let disponibility = sqlx::query_as::<_, DbDisponibility>(
            r#"
            SELECT id, day, start_date, end_date, openning_time, closing_time, created_at, updated_at
            FROM disponibilities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(disponibility.map(Disponibility::from))
    }

    async fn insert(&self, draft: &DisponibilityDraft) -> Result<Disponibility> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let disponibility = sqlx::query_as::<_, DbDisponibility>(
            r#"
            INSERT INTO disponibilities (id, day, start_date, end_date, openning_time, closing_time,
                                         created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, day, start_date, end_date, openning_time, closing_time, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(draft.day)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.opening_time)
        .bind(draft.closing_time)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(disponibility.into())
    }

    async fn update(&self, id: Uuid, draft: &DisponibilityDraft) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE disponibilities
            SET day = $2, start_date = $3, end_date = $4, openning_time = $5, closing_time = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(draft.day)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(draft.opening_time)
        .bind(draft.closing_time)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM disponibilities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
