use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: Option<String>,
    pub admin: bool,
    pub member: bool,
    pub group: String,
    pub year: i32,
}

/// Request body of `POST /users` and `PUT /users/:id`.
///
/// Every field is kept as raw JSON so the validation chain can reject a
/// wrongly-typed value with the code of that field instead of failing the
/// whole body at deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub display_name: Option<Value>,
    #[serde(default)]
    pub admin: Option<Value>,
    #[serde(default)]
    pub member: Option<Value>,
    #[serde(default)]
    pub group: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

/// Validated user fields, everything but the immutable `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub display_name: Option<String>,
    pub admin: bool,
    pub member: bool,
    pub group: String,
    pub year: i32,
}

impl UserFields {
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            display_name: self.display_name,
            admin: self.admin,
            member: self.member,
            group: self.group,
            year: self.year,
        }
    }
}
