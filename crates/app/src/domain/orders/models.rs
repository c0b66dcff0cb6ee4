//! Order models

use harvest::{
    cart::{CartLineItem, FarmerRef},
    order::OrderDraft,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload accepted by the order submission API: the cart snapshot plus the
/// validated draft.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    /// Farmer the order goes to
    pub farmer: FarmerRef,

    /// Line items being ordered
    pub items: Vec<CartLineItem>,

    /// Fulfillment details, payment method and notes
    pub order: OrderDraft,
}

/// Identifier returned for a created order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CreatedOrder {
    /// Order identifier
    pub uuid: Uuid,
}

#[cfg(test)]
mod tests {
    use harvest::order::FulfillmentMethod;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn payload_serialises_the_selected_method() -> TestResult {
        let payload = OrderPayload {
            farmer: FarmerRef {
                uuid: Uuid::now_v7(),
                name: "Meadowbrook Farm".into(),
            },
            items: Vec::new(),
            order: OrderDraft {
                method: Some(FulfillmentMethod::Pickup),
                ..OrderDraft::default()
            },
        };

        let value = serde_json::to_value(&payload)?;

        assert_eq!(value["order"]["method"], "pickup");
        assert_eq!(value["farmer"]["name"], "Meadowbrook Farm");

        Ok(())
    }
}
