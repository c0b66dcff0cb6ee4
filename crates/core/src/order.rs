//! Order drafts

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How an order is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMethod {
    /// The buyer collects from the farmer.
    Pickup,

    /// The farmer delivers to the buyer.
    Delivery,
}

impl fmt::Display for FulfillmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pickup => f.write_str("pickup"),
            Self::Delivery => f.write_str("delivery"),
        }
    }
}

/// Geographic point attached to a detected address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lng: f64,
}

/// Destination for a delivery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryAddress {
    /// Street line
    pub street: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// Postal code
    pub zip_code: String,

    /// Geocoded point, when the address came from location detection.
    pub coordinates: Option<Coordinates>,

    /// Whether the address was filled in by location detection.
    pub location_detected: bool,
}

/// Date, time and meeting point for a pickup order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupDetails {
    /// Chosen pickup date
    pub date: Option<Date>,

    /// Chosen pickup time, `"HH:MM"` or empty
    pub time: String,

    /// Where on the farm to meet
    pub location: String,
}

/// Destination and timing for a delivery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryDetails {
    /// Delivery address
    pub address: DeliveryAddress,

    /// Chosen delivery date
    pub date: Option<Date>,

    /// Chosen delivery time, `"HH:MM"` or empty
    pub time: String,
}

/// How the buyer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Cash handed over at pickup or delivery.
    #[default]
    Cash,

    /// Card charged on submission.
    Card,

    /// Mobile money transfer.
    MobileMoney,
}

/// The in-progress order a checkout session owns exclusively.
///
/// `Default` is the unset state; the method selector moves only on explicit
/// buyer input, and the draft is discarded on successful submission or when
/// the session is abandoned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDraft {
    /// Selected fulfillment method; `None` until the buyer chooses.
    pub method: Option<FulfillmentMethod>,

    /// Pickup details, read when the method is pickup.
    pub pickup: PickupDetails,

    /// Delivery details, read when the method is delivery.
    pub delivery: DeliveryDetails,

    /// Payment method.
    pub payment: PaymentMethod,

    /// Free-form note to the farmer.
    pub notes: String,
}
