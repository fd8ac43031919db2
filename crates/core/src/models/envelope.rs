use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body of every successful response. `data` is always present, `null` when
/// the operation has nothing to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub status: Status,
    pub message: String,
    pub code: String,
    pub data: Option<T>,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(code: &str, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            code: code.to_string(),
            data,
        }
    }
}

/// Body of every failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: Status,
    pub message: String,
    pub code: String,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            code: code.to_string(),
        }
    }
}
