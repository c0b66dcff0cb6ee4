//! Application layer for the Harvest marketplace checkout: collaborator
//! service ports, the cart persistence port, and the checkout session that
//! orchestrates them.

pub mod checkout;
pub mod config;
pub mod domain;
pub mod observability;
