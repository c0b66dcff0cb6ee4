//! Order service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order rejected: {0}")]
    Rejected(String),

    #[error("http error")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
