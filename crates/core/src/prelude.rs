//! Harvest prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    availability::{PickupDayStatus, resolve_pickup_day},
    cart::{CartLineItem, FarmerRef, FulfillmentOptions},
    fixtures::{Fixture, FixtureError},
    fulfillment::FulfillmentAvailability,
    order::{
        Coordinates, DeliveryAddress, DeliveryDetails, FulfillmentMethod, OrderDraft,
        PaymentMethod, PickupDetails,
    },
    schedule::{DayHours, Weekday, WeeklySchedule, is_within_hours},
    validation::{ValidationReport, validate_order},
};
