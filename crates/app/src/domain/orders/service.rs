//! Order submission service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};

use crate::domain::orders::{
    errors::OrdersServiceError,
    models::{CreatedOrder, OrderPayload},
};

/// Write access to the order book.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit an assembled order, returning the created order's identifier.
    async fn submit(&self, order: &OrderPayload) -> Result<CreatedOrder, OrdersServiceError>;
}

/// HTTP client for the order submission API.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    base_url: String,
    http: Client,
}

impl HttpOrdersService {
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
impl OrdersService for HttpOrdersService {
    async fn submit(&self, order: &OrderPayload) -> Result<CreatedOrder, OrdersServiceError> {
        let url = format!("{}/orders", self.base_url);

        let response = self.http.post(&url).json(order).send().await?;

        if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
            let text = response.text().await.unwrap_or_default();

            return Err(OrdersServiceError::Rejected(text));
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(OrdersServiceError::UnexpectedResponse(format!(
                "order submission failed with status {status}: {text}"
            )));
        }

        let created: CreatedOrder = response.json().await?;

        Ok(created)
    }
}
