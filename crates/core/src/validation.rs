//! Order validation

use smallvec::SmallVec;

use crate::{
    availability::{PickupDayStatus, resolve_pickup_day},
    order::{FulfillmentMethod, OrderDraft},
    schedule::{DayHours, WeeklySchedule, is_within_hours},
};

/// Everything stopping a draft from being submitted.
///
/// Violations accumulate rather than failing fast, so a submission handler
/// can render the complete list of corrections in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Required fields that are empty or unset.
    pub missing_fields: SmallVec<[&'static str; 4]>,

    /// Rule violations beyond plain missing fields.
    pub failure_reasons: SmallVec<[String; 2]>,
}

impl ValidationReport {
    /// True when nothing is missing and no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty() && self.failure_reasons.is_empty()
    }

    fn require(&mut self, field: &'static str, present: bool) {
        if !present {
            self.missing_fields.push(field);
        }
    }
}

/// Validate a draft ahead of submission.
///
/// The pickup path needs a date and time, rejects dates the effective
/// schedule resolves as closed, and bounds the time by the open day's
/// hours; while the schedule is unresolved, pickup drafts stay blocked with
/// a corrective reason. The delivery path needs a complete street, city and
/// state plus a date and time; the postal code is not required, and no
/// business-hours constraint applies to delivery timing. Never fails: the
/// report is data for the caller to render.
#[must_use]
pub fn validate_order(draft: &OrderDraft, schedule: Option<&WeeklySchedule>) -> ValidationReport {
    let mut report = ValidationReport::default();

    match draft.method {
        None => report.missing_fields.push("order type"),
        Some(FulfillmentMethod::Pickup) => validate_pickup(draft, schedule, &mut report),
        Some(FulfillmentMethod::Delivery) => validate_delivery(draft, &mut report),
    }

    report
}

fn validate_pickup(
    draft: &OrderDraft,
    schedule: Option<&WeeklySchedule>,
    report: &mut ValidationReport,
) {
    let pickup = &draft.pickup;

    report.require("pickup date", pickup.date.is_some());
    report.require("pickup time", !pickup.time.is_empty());

    match resolve_pickup_day(pickup.date, schedule) {
        PickupDayStatus::Open { open, close, .. } => {
            if !pickup.time.is_empty() {
                let day = DayHours::between(&open, &close);

                if !is_within_hours(&pickup.time, Some(&day)) {
                    report
                        .failure_reasons
                        .push(format!("pickup time must be between {open} and {close}"));
                }
            }
        }

        // A closed date is a hard failure regardless of the chosen time,
        // and unresolved hours keep submission blocked until they arrive.
        status @ (PickupDayStatus::Closed { .. } | PickupDayStatus::HoursUnavailable) => {
            report.failure_reasons.push(status.to_string());
        }

        // Already reported as a missing field.
        PickupDayStatus::AwaitingDate => {}
    }
}

fn validate_delivery(draft: &OrderDraft, report: &mut ValidationReport) {
    let delivery = &draft.delivery;
    let address = &delivery.address;

    report.require("street", !address.street.is_empty());
    report.require("city", !address.city.is_empty());
    report.require("state", !address.state.is_empty());
    // The postal code is recognised elsewhere but not required here.

    report.require("delivery date", delivery.date.is_some());
    report.require("delivery time", !delivery.time.is_empty());
}
