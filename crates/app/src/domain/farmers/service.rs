//! Farmer profile service.

use async_trait::async_trait;
use harvest::schedule::WeeklySchedule;
use mockall::automock;
use reqwest::{Client, StatusCode};
use uuid::Uuid;

use crate::domain::farmers::errors::FarmersServiceError;

/// Read access to farmer profiles.
#[automock]
#[async_trait]
pub trait FarmersService: Send + Sync {
    /// Fetch the weekly business hours declared on a farmer's profile.
    ///
    /// `Ok(None)` means the farmer has not declared hours.
    async fn business_hours(
        &self,
        farmer: Uuid,
    ) -> Result<Option<WeeklySchedule>, FarmersServiceError>;
}

/// HTTP client for the farmer profile API.
#[derive(Debug, Clone)]
pub struct HttpFarmersService {
    base_url: String,
    http: Client,
}

impl HttpFarmersService {
    /// Create a new client for the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl FarmersService for HttpFarmersService {
    async fn business_hours(
        &self,
        farmer: Uuid,
    ) -> Result<Option<WeeklySchedule>, FarmersServiceError> {
        let url = format!("{}/farmers/{farmer}/business-hours", self.base_url);

        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(FarmersServiceError::UnexpectedResponse(format!(
                "business hours request failed with status {status}: {text}"
            )));
        }

        let hours: WeeklySchedule = response.json().await?;

        Ok(Some(hours))
    }
}
