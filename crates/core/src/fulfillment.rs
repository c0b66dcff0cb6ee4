//! Fulfillment availability

use crate::{cart::CartLineItem, order::FulfillmentMethod, schedule::WeeklySchedule};

/// The fulfillment methods a cart can actually be completed by, with the
/// effective pickup-hours source.
///
/// Derived from the cart on every change and never persisted. A method is
/// offered only when every line item explicitly enables it; carts with no
/// configured items at all degrade to a permissive fallback so legacy
/// products cannot block checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentAvailability {
    /// Delivery is offered.
    pub delivery: bool,

    /// Pickup is offered.
    pub pickup: bool,

    /// The custom schedule shared by the pickup-enabled items, when one
    /// exists.
    pub pickup_hours: Option<WeeklySchedule>,

    /// Pickup dates must be checked against the farmer's declared business
    /// hours instead of a per-product schedule.
    pub needs_business_hours: bool,
}

impl FulfillmentAvailability {
    /// Reconcile the fulfillment configuration of every item in the cart.
    ///
    /// Pure function of the items: re-running it over an unchanged cart
    /// yields an identical result. Items disagreeing on the pickup-hours
    /// source fall back to the farmer's declared hours rather than guessing
    /// which custom schedule wins. Empty carts are a caller precondition;
    /// checkout never starts without items.
    #[must_use]
    pub fn for_items(items: &[CartLineItem]) -> Self {
        if items.iter().all(|item| item.fulfillment.is_none()) {
            // Legacy carts with nothing configured must not block checkout.
            return Self {
                delivery: true,
                pickup: true,
                pickup_hours: None,
                needs_business_hours: true,
            };
        }

        let delivery = items.iter().all(CartLineItem::allows_delivery);
        let pickup = items.iter().all(CartLineItem::allows_pickup);

        if !pickup {
            return Self {
                delivery,
                pickup,
                pickup_hours: None,
                needs_business_hours: false,
            };
        }

        let with_custom_hours = items
            .iter()
            .filter(|item| item.pickup_hours.is_some())
            .count();

        if with_custom_hours == items.len() {
            // Every pickup-enabled item names its own hours. They all belong
            // to the same farmer and are assumed identical, so the first one
            // is taken without a cross-item equality check.
            let pickup_hours = items.iter().find_map(|item| item.pickup_hours.clone());

            return Self {
                delivery,
                pickup,
                pickup_hours,
                needs_business_hours: false,
            };
        }

        // Every item defers to business hours, or custom and deferred items
        // are mixed. Either way the farmer's declared hours are the source
        // of truth.
        Self {
            delivery,
            pickup,
            pickup_hours: None,
            needs_business_hours: true,
        }
    }

    /// Whether the given method is offered.
    #[must_use]
    pub fn offers(&self, method: FulfillmentMethod) -> bool {
        match method {
            FulfillmentMethod::Pickup => self.pickup,
            FulfillmentMethod::Delivery => self.delivery,
        }
    }

    /// The single offered method, when exactly one survives aggregation.
    #[must_use]
    pub fn sole_method(&self) -> Option<FulfillmentMethod> {
        match (self.pickup, self.delivery) {
            (true, false) => Some(FulfillmentMethod::Pickup),
            (false, true) => Some(FulfillmentMethod::Delivery),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::{
        cart::FulfillmentOptions,
        schedule::{DayHours, WeeklySchedule},
    };

    use super::*;

    fn item(
        fulfillment: Option<FulfillmentOptions>,
        pickup_hours: Option<WeeklySchedule>,
    ) -> CartLineItem {
        CartLineItem {
            product: Uuid::now_v7(),
            name: "Heirloom Tomatoes".into(),
            quantity: 1,
            price: Decimal::new(450, 2),
            unit: "lb".into(),
            fulfillment,
            pickup_hours,
        }
    }

    fn both() -> Option<FulfillmentOptions> {
        Some(FulfillmentOptions {
            delivery: true,
            pickup: true,
        })
    }

    fn saturday_mornings() -> WeeklySchedule {
        WeeklySchedule {
            saturday: DayHours::between("08:00", "12:00"),
            ..WeeklySchedule::default()
        }
    }

    #[test]
    fn delivery_requires_every_item_to_enable_it() {
        let unanimous = [item(both(), None), item(both(), None)];
        assert!(
            FulfillmentAvailability::for_items(&unanimous).delivery,
            "all enabled offers delivery"
        );

        let dissenting = [
            item(both(), None),
            item(
                Some(FulfillmentOptions {
                    delivery: false,
                    pickup: true,
                }),
                None,
            ),
        ];
        assert!(
            !FulfillmentAvailability::for_items(&dissenting).delivery,
            "one refusal drops delivery"
        );
    }

    #[test]
    fn unconfigured_item_counts_against_both_methods() {
        // One configured item alongside one legacy item: the legacy item
        // enables nothing, so neither method survives.
        let items = [item(both(), None), item(None, None)];

        let availability = FulfillmentAvailability::for_items(&items);

        assert!(!availability.delivery, "legacy item blocks delivery");
        assert!(!availability.pickup, "legacy item blocks pickup");
    }

    #[test]
    fn fully_unconfigured_cart_falls_back_permissively() {
        let items = [item(None, None), item(None, None)];

        let availability = FulfillmentAvailability::for_items(&items);

        assert!(availability.delivery, "fallback enables delivery");
        assert!(availability.pickup, "fallback enables pickup");
        assert!(
            availability.needs_business_hours,
            "fallback defers to business hours"
        );
        assert!(
            availability.pickup_hours.is_none(),
            "fallback has no custom schedule"
        );
    }

    #[test]
    fn uniform_custom_hours_take_the_first_schedule() {
        let items = [
            item(both(), Some(saturday_mornings())),
            item(both(), Some(saturday_mornings())),
        ];

        let availability = FulfillmentAvailability::for_items(&items);

        assert_eq!(
            availability.pickup_hours,
            Some(saturday_mornings()),
            "custom schedule survives"
        );
        assert!(
            !availability.needs_business_hours,
            "custom hours need no business hours"
        );
    }

    #[test]
    fn mixed_hours_sources_fall_back_to_business_hours() {
        let items = [item(both(), Some(saturday_mornings())), item(both(), None)];

        let availability = FulfillmentAvailability::for_items(&items);

        assert!(
            availability.pickup_hours.is_none(),
            "no schedule is guessed"
        );
        assert!(
            availability.needs_business_hours,
            "mixed sources defer to business hours"
        );
    }

    #[test]
    fn all_deferring_items_need_business_hours() {
        let items = [item(both(), None), item(both(), None)];

        let availability = FulfillmentAvailability::for_items(&items);

        assert!(availability.pickup_hours.is_none(), "nothing custom");
        assert!(availability.needs_business_hours, "deferral propagates");
    }

    #[test]
    fn no_pickup_means_no_hours_source_at_all() {
        let items = [item(
            Some(FulfillmentOptions {
                delivery: true,
                pickup: false,
            }),
            None,
        )];

        let availability = FulfillmentAvailability::for_items(&items);

        assert!(!availability.pickup, "pickup dropped");
        assert!(
            !availability.needs_business_hours,
            "no pickup means no hours lookup"
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let items = [item(both(), Some(saturday_mornings())), item(both(), None)];

        let first = FulfillmentAvailability::for_items(&items);
        let second = FulfillmentAvailability::for_items(&items);

        assert_eq!(first, second, "same cart yields the same availability");
    }

    #[test]
    fn sole_method_reports_the_only_survivor() {
        let pickup_only = FulfillmentAvailability {
            pickup: true,
            ..FulfillmentAvailability::default()
        };
        assert_eq!(pickup_only.sole_method(), Some(FulfillmentMethod::Pickup));

        let both_offered = FulfillmentAvailability {
            pickup: true,
            delivery: true,
            ..FulfillmentAvailability::default()
        };
        assert_eq!(both_offered.sole_method(), None);

        assert_eq!(FulfillmentAvailability::default().sole_method(), None);
    }
}
