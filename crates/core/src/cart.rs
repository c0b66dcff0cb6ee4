//! Cart line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::WeeklySchedule;

/// Per-product fulfillment flags.
///
/// A flag a source omits deserialises to false: products only offer the
/// methods they explicitly enable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOptions {
    /// The product can be delivered.
    #[serde(default)]
    pub delivery: bool,

    /// The product can be picked up.
    #[serde(default)]
    pub pickup: bool,
}

/// The farmer an active cart belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerRef {
    /// Farmer identifier
    pub uuid: Uuid,

    /// Farmer display name
    pub name: String,
}

/// A single line item in a cart.
///
/// Legacy products carry no fulfillment configuration at all; both optional
/// fields model that explicitly rather than leaning on empty sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product identifier
    pub product: Uuid,

    /// Product display name
    pub name: String,

    /// Quantity ordered
    pub quantity: u32,

    /// Unit price
    pub price: Decimal,

    /// Sale unit, e.g. `"lb"` or `"dozen"`
    pub unit: String,

    /// Explicit fulfillment configuration, when the product carries one.
    #[serde(default)]
    pub fulfillment: Option<FulfillmentOptions>,

    /// Custom pickup hours overriding the farmer's business hours.
    #[serde(default)]
    pub pickup_hours: Option<WeeklySchedule>,
}

impl CartLineItem {
    /// Whether this item explicitly enables delivery.
    #[must_use]
    pub fn allows_delivery(&self) -> bool {
        self.fulfillment.is_some_and(|options| options.delivery)
    }

    /// Whether this item explicitly enables pickup.
    #[must_use]
    pub fn allows_pickup(&self) -> bool {
        self.fulfillment.is_some_and(|options| options.pickup)
    }
}
