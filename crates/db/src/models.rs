use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use planning_core::models::{disponibility::Disponibility, reservation::Reservation, user::User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: Option<String>,
    pub admin: bool,
    pub member: bool,
    pub group_name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub title: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDisponibility {
    pub id: Uuid,
    pub day: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub openning_time: f64,
    pub closing_time: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            display_name: row.display_name,
            admin: row.admin,
            member: row.member,
            group: row.group_name,
            year: row.year,
        }
    }
}

impl From<DbReservation> for Reservation {
    fn from(row: DbReservation) -> Self {
        Reservation {
            id: row.id,
            title: row.title,
            start_date: row.start_date,
            end_date: row.end_date,
            owner_id: row.owner_id,
        }
    }
}

impl From<DbDisponibility> for Disponibility {
    fn from(row: DbDisponibility) -> Self {
        Disponibility {
            id: row.id,
            day: row.day,
            start_date: row.start_date,
            end_date: row.end_date,
            opening_time: row.openning_time,
            closing_time: row.closing_time,
        }
    }
}
