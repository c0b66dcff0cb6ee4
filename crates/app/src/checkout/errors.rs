//! Checkout errors.

use harvest::validation::ValidationReport;
use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout never starts over an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The draft failed validation; submission stays blocked.
    #[error("order is not ready to submit")]
    Invalid(ValidationReport),

    /// The submission API refused or failed.
    #[error("order submission failed")]
    Submission(#[from] OrdersServiceError),
}
