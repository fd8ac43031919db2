use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A recurring availability window: every `day` of the week between
/// `start_date` and `end_date`, open from `opening_time` to `closing_time`.
///
/// Times are fractional hours (`8.5` is 8:30). The wire name `openningTime`
/// is kept as clients already depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disponibility {
    pub id: Uuid,
    /// Weekday index, 0 is Sunday.
    pub day: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "openningTime")]
    pub opening_time: f64,
    pub closing_time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisponibilityPayload {
    #[serde(default)]
    pub day: Option<Value>,
    #[serde(default)]
    pub start_date: Option<Value>,
    #[serde(default)]
    pub end_date: Option<Value>,
    #[serde(default, rename = "openningTime")]
    pub opening_time: Option<Value>,
    #[serde(default)]
    pub closing_time: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisponibilityDraft {
    pub day: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub opening_time: f64,
    pub closing_time: f64,
}

impl DisponibilityDraft {
    pub fn into_disponibility(self, id: Uuid) -> Disponibility {
        Disponibility {
            id,
            day: self.day,
            start_date: self.start_date,
            end_date: self.end_date,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
        }
    }
}
