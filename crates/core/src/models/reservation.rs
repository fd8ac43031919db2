use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Wire format of reservation timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "timestamp")]
    pub start_date: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_date: NaiveDateTime,
    pub owner_id: String,
}

/// Request body of `POST /reservations` and `PUT /reservations/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub start_date: Option<Value>,
    #[serde(default)]
    pub end_date: Option<Value>,
    #[serde(default)]
    pub owner_id: Option<Value>,
}

/// A validated reservation that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub title: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub owner_id: String,
}

impl ReservationDraft {
    pub fn into_reservation(self, id: Uuid) -> Reservation {
        Reservation {
            id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            owner_id: self.owner_id,
        }
    }
}

/// Serde adapter for `YYYY-MM-DD HH:mm:ss` timestamps.
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)
    }
}
