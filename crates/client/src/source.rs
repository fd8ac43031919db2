use async_trait::async_trait;
use eyre::{Result, WrapErr, eyre};
use planning_core::models::{
    disponibility::Disponibility,
    envelope::{ErrorEnvelope, SuccessEnvelope},
    reservation::Reservation,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Where the planning manager gets its collections from.
#[async_trait]
pub trait PlanningSource: Send + Sync {
    async fn fetch_disponibilities(&self) -> Result<Vec<Disponibility>>;

    async fn fetch_reservations(&self) -> Result<Vec<Reservation>>;
}

/// Reads the collections from the planning API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPlanningSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlanningSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let url = format!("{}/api/v1/{}", self.base_url, collection);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let envelope: ErrorEnvelope = response
                .json()
                .await
                .wrap_err_with(|| format!("{} answered {} without an error envelope", url, status))?;
            return Err(eyre!(
                "{} answered {}: {} ({})",
                url,
                status,
                envelope.message,
                envelope.code
            ));
        }

        let envelope: SuccessEnvelope<Vec<T>> = response
            .json()
            .await
            .wrap_err_with(|| format!("Unexpected body from {}", url))?;

        Ok(envelope.data.unwrap_or_default())
    }
}

#[async_trait]
impl PlanningSource for HttpPlanningSource {
    async fn fetch_disponibilities(&self) -> Result<Vec<Disponibility>> {
        self.get_collection("disponibilities").await
    }

    async fn fetch_reservations(&self) -> Result<Vec<Reservation>> {
        self.get_collection("reservations").await
    }
}
