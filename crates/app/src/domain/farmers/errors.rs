//! Farmer profile service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FarmersServiceError {
    #[error("http error")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
