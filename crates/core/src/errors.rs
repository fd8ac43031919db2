use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("{message}")]
    Validation { code: &'static str, message: String },

    #[error("{message}")]
    Storage {
        code: &'static str,
        message: String,
        #[source]
        source: eyre::Report,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl PlanningError {
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Builds a closure suitable for `map_err` on repository results.
    ///
    /// ```
    /// use planning_core::errors::PlanningError;
    ///
    /// let failed: eyre::Result<()> = Err(eyre::eyre!("connection reset"));
    /// let err = failed
    ///     .map_err(PlanningError::storage("USER/LIST_FAILED", "Could not list users"))
    ///     .unwrap_err();
    /// assert_eq!(err.code(), "USER/LIST_FAILED");
    /// ```
    pub fn storage(
        code: &'static str,
        message: &'static str,
    ) -> impl FnOnce(eyre::Report) -> Self {
        move |source| Self::Storage {
            code,
            message: message.to_string(),
            source,
        }
    }

    /// The machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { code, .. }
            | Self::Validation { code, .. }
            | Self::Storage { code, .. } => code,
            Self::Internal(_) => crate::codes::INTERNAL_ERROR,
        }
    }
}

pub type PlanningResult<T> = Result<T, PlanningError>;
