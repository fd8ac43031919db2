use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use planning_core::models::reservation::{Reservation, ReservationDraft};
use uuid::Uuid;

use crate::{DbPool, models::DbReservation};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Reservation>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>>;

    async fn insert(&self, draft: &ReservationDraft) -> Result<Reservation>;

    async fn update(&self, id: Uuid, draft: &ReservationDraft) -> Result<u64>;

    async fn delete_by_id(&self, id: Uuid) -> Result<u64>;
}

pub struct PgReservationRepository {
    pool: DbPool,
}

impl PgReservationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn find_all(&self) -> Result<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, DbReservation>(
            r#"
            SELECT id, title, start_date, end_date, owner_id, created_at, updated_at
            FROM reservations
            ORDER BY start_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations.into_iter().map(Reservation::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, DbReservation>(
            r#"
            SELECT id, title, start_date, end_date, owner_id, created_at, updated_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation.map(Reservation::from))
    }

    async fn insert(&self, draft: &ReservationDraft) -> Result<Reservation> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        tracing::debug!(
            "Creating reservation: id={}, owner={}, start={}, end={}",
            id, draft.owner_id, draft.start_date, draft.end_date
        );

        let reservation = sqlx::query_as::<_, DbReservation>(
            r#"
            INSERT INTO reservations (id, title, start_date, end_date, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id, title, start_date, end_date, owner_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.owner_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(reservation.into())
    }

    async fn update(&self, id: Uuid, draft: &ReservationDraft) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET title = $2, start_date = $3, end_date = $4, owner_id = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(draft.start_date)
        .bind(draft.end_date)
        .bind(&draft.owner_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
