//! Fixtures
//!
//! Named YAML checkout scenarios under the crate's `fixtures/` directory,
//! shared by tests, examples and the CLI.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{CartLineItem, FarmerRef},
    order::OrderDraft,
    schedule::WeeklySchedule,
};

/// Fixture parsing errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The scenario holds no cart items
    #[error("Fixture {0} has an empty cart")]
    EmptyCart(String),
}

/// A named checkout scenario loaded from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Farmer the cart belongs to.
    pub farmer: FarmerRef,

    /// Farmer-level business hours, when declared.
    #[serde(default)]
    pub business_hours: Option<WeeklySchedule>,

    /// Cart line items.
    pub items: Vec<CartLineItem>,

    /// Pre-filled order draft, when the scenario includes one.
    #[serde(default)]
    pub draft: OrderDraft,
}

impl Fixture {
    /// Load a named fixture set from the crate's `fixtures/` directory.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when the file is missing or unreadable,
    /// fails to parse, or describes an empty cart.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("fixtures")
                .join(format!("{name}.yaml")),
        )
    }

    /// Load a fixture from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] when the file is missing or unreadable,
    /// fails to parse, or describes an empty cart.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let fixture: Self = serde_norway::from_str(&raw)?;

        if fixture.items.is_empty() {
            return Err(FixtureError::EmptyCart(path.display().to_string()));
        }

        Ok(fixture)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn loads_a_named_set() -> TestResult {
        let fixture = Fixture::from_set("produce-stand")?;

        assert_eq!(fixture.farmer.name, "Meadowbrook Farm");
        assert_eq!(fixture.items.len(), 3, "the stand cart has three items");
        assert!(fixture.business_hours.is_some(), "the stand declares hours");

        Ok(())
    }

    #[test]
    fn unknown_set_surfaces_the_io_error() {
        let result = Fixture::from_set("no-such-farm");

        assert!(
            matches!(result, Err(FixtureError::Io(_))),
            "missing files surface as IO errors"
        );
    }

    #[test]
    fn empty_cart_is_rejected() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "farmer: {{ uuid: \"0197cf2e-9aaf-7a31-bd7d-1fabc1d6d001\", name: Bare Field }}\nitems: []"
        )?;

        let result = Fixture::from_path(file.path());

        assert!(
            matches!(result, Err(FixtureError::EmptyCart(_))),
            "empty carts are rejected"
        );

        Ok(())
    }
}
