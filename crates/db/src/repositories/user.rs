use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use planning_core::models::user::User;

use crate::{DbPool, models::DbUser};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    async fn insert(&self, user: &User) -> Result<User>;

    async fn update(&self, user: &User) -> Result<u64>;

    async fn delete_by_id(&self, id: &str) -> Result<u64>;
}

pub struct PgUserRepository {
    pool: DbPool,
}

impl PgUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, first_name, last_name, display_name, admin, member, group_name, year,
                   created_at, updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        tracing::debug!("Getting user by id: {}", id);

        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, first_name, last_name, display_name, admin, member, group_name, year,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(User::from))
    }

    async fn insert(&self, user: &User) -> Result<User> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (id, first_name, last_name, display_name, admin, member, group_name,
                               year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id, first_name, last_name, display_name, admin, member, group_name, year,
                      created_at, updated_at
            "#,
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.display_name)
        .bind(user.admin)
        .bind(user.member)
        .bind(&user.group)
        .bind(user.year)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("User created successfully: id={}", created.id);
        Ok(created.into())
    }

    async fn update(&self, user: &User) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, display_name = $4, admin = $5, member = $6,
                group_name = $7, year = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.display_name)
        .bind(user.admin)
        .bind(user.member)
        .bind(&user.group)
        .bind(user.year)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
