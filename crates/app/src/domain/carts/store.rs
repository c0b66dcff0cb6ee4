//! Cart store.

use std::{fs, io, path::PathBuf};

use harvest::cart::{CartLineItem, FarmerRef};
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::domain::carts::errors::CartStoreError;

/// The persisted active cart: one farmer and their line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCart {
    /// Farmer the cart belongs to
    pub farmer: FarmerRef,

    /// Line items in the cart
    pub items: Vec<CartLineItem>,
}

/// Key-value persistence port for the active cart.
///
/// The cart survives application restarts; checkout only ever consumes the
/// loaded in-memory snapshot and never reads through this port directly.
#[automock]
pub trait CartStore: Send + Sync {
    /// Load the active cart, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the backing store is unreadable or
    /// holds corrupt data.
    fn load(&self) -> Result<Option<StoredCart>, CartStoreError>;

    /// Persist the active cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the cart cannot be written.
    fn save(&self, cart: &StoredCart) -> Result<(), CartStoreError>;

    /// Remove the active cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the backing store cannot be
    /// cleared.
    fn clear(&self) -> Result<(), CartStoreError>;
}

/// Cart store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    /// Create a store over the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Result<Option<StoredCart>, CartStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, cart: &StoredCart) -> Result<(), CartStoreError> {
        fs::write(&self.path, serde_json::to_vec_pretty(cart)?)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), CartStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
