//! Checkout session.

use harvest::{
    availability::{PickupDayStatus, resolve_pickup_day},
    fulfillment::FulfillmentAvailability,
    order::{FulfillmentMethod, OrderDraft},
    schedule::WeeklySchedule,
    validation::{ValidationReport, validate_order},
};
use jiff::civil::Date;
use tracing::warn;

use crate::{
    checkout::errors::CheckoutError,
    domain::{
        carts::StoredCart,
        farmers::FarmersService,
        orders::{CreatedOrder, OrderPayload, OrdersService},
    },
};

/// The single-owner lifetime of an order draft, from cart confirmation to
/// submission or abandonment.
///
/// The session owns the draft exclusively and mutates it on buyer input;
/// availability is recomputed whenever the cart snapshot changes. Dropping
/// the session discards the draft.
#[derive(Debug)]
pub struct CheckoutSession {
    cart: StoredCart,
    availability: FulfillmentAvailability,
    draft: OrderDraft,
    business_hours: Option<WeeklySchedule>,
    hours_requested: bool,
}

impl CheckoutSession {
    /// Start a checkout over the given cart snapshot.
    ///
    /// When aggregation leaves exactly one fulfillment method, it is
    /// pre-selected on the draft.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart holds no items.
    pub fn new(cart: StoredCart) -> Result<Self, CheckoutError> {
        if cart.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let availability = FulfillmentAvailability::for_items(&cart.items);
        let draft = OrderDraft {
            method: availability.sole_method(),
            ..OrderDraft::default()
        };

        Ok(Self {
            cart,
            availability,
            draft,
            business_hours: None,
            hours_requested: false,
        })
    }

    /// The cart under checkout.
    #[must_use]
    pub fn cart(&self) -> &StoredCart {
        &self.cart
    }

    /// The availability computed from the current cart snapshot.
    #[must_use]
    pub fn availability(&self) -> &FulfillmentAvailability {
        &self.availability
    }

    /// The in-progress draft.
    #[must_use]
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Mutable access to the draft for form input handlers.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    /// Select the fulfillment method.
    pub fn select_method(&mut self, method: FulfillmentMethod) {
        self.draft.method = Some(method);
    }

    /// Swap in a fresh cart snapshot and recompute availability.
    ///
    /// A selected method the new cart no longer offers falls back to the
    /// sole surviving method, or to unset when both remain in play.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the new cart holds no
    /// items.
    pub fn replace_cart(&mut self, cart: StoredCart) -> Result<(), CheckoutError> {
        if cart.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.cart = cart;
        self.availability = FulfillmentAvailability::for_items(&self.cart.items);

        match self.draft.method {
            Some(method) if self.availability.offers(method) => {}
            _ => self.draft.method = self.availability.sole_method(),
        }

        Ok(())
    }

    /// Fetch the farmer's business hours when the cart defers to them.
    ///
    /// At most one attempt is made per session. A failed fetch is logged
    /// and leaves the hours unresolved, so pickup reports
    /// [`PickupDayStatus::HoursUnavailable`] rather than crashing the flow.
    pub async fn ensure_business_hours(&mut self, farmers: &dyn FarmersService) {
        if !self.availability.needs_business_hours || self.hours_requested {
            return;
        }

        self.hours_requested = true;

        match farmers.business_hours(self.cart.farmer.uuid).await {
            Ok(hours) => self.business_hours = hours,
            Err(error) => {
                warn!(farmer = %self.cart.farmer.uuid, %error, "failed to fetch business hours");
            }
        }
    }

    /// The schedule pickup dates are validated against: a shared per-item
    /// custom schedule when the cart agrees on one, otherwise the farmer's
    /// fetched business hours.
    #[must_use]
    pub fn effective_schedule(&self) -> Option<&WeeklySchedule> {
        self.availability
            .pickup_hours
            .as_ref()
            .or(self.business_hours.as_ref())
    }

    /// Resolve a candidate pickup date against the effective schedule.
    #[must_use]
    pub fn pickup_day_status(&self, date: Option<Date>) -> PickupDayStatus {
        resolve_pickup_day(date, self.effective_schedule())
    }

    /// Validate the draft as it stands.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate_order(&self.draft, self.effective_schedule())
    }

    /// Submit the order.
    ///
    /// Re-validates first: an invalid draft blocks submission and carries
    /// the full correction list back to the caller. On success the draft is
    /// discarded and the created order returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Invalid`] for a draft that is not ready, or
    /// [`CheckoutError::Submission`] when the order API refuses or fails.
    pub async fn submit(
        &mut self,
        orders: &dyn OrdersService,
    ) -> Result<CreatedOrder, CheckoutError> {
        let report = self.validate();

        if !report.is_valid() {
            return Err(CheckoutError::Invalid(report));
        }

        let payload = OrderPayload {
            farmer: self.cart.farmer.clone(),
            items: self.cart.items.clone(),
            order: self.draft.clone(),
        };

        let created = orders.submit(&payload).await?;

        self.draft = OrderDraft::default();

        Ok(created)
    }
}
