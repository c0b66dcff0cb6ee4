//! Cart store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("storage error")]
    Io(#[from] std::io::Error),

    #[error("corrupt cart data")]
    Json(#[from] serde_json::Error),
}
