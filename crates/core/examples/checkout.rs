//! Checkout Example
//!
//! Resolves fulfillment availability, pickup-day status and draft validity
//! for a fixture cart.
//!
//! Use `-f` to load a fixture set by name
//! Use `-d` to supply a candidate pickup date (YYYY-MM-DD)

use anyhow::Result;
use clap::Parser;
use harvest::{
    availability::resolve_pickup_day,
    fixtures::Fixture,
    fulfillment::FulfillmentAvailability,
    schedule::Weekday,
    utils::ExampleCheckoutArgs,
    validation::validate_order,
};
use jiff::civil::Date;

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleCheckoutArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let availability = FulfillmentAvailability::for_items(&fixture.items);

    println!(
        "cart for {}: {} item(s)",
        fixture.farmer.name,
        fixture.items.len()
    );
    println!(
        "  delivery: {}",
        if availability.delivery { "offered" } else { "unavailable" }
    );
    println!(
        "  pickup:   {}",
        if availability.pickup { "offered" } else { "unavailable" }
    );

    let schedule = availability
        .pickup_hours
        .as_ref()
        .or(fixture.business_hours.as_ref());

    if availability.needs_business_hours {
        println!("  pickup hours come from the farmer's business hours");
    }

    if let Some(schedule) = schedule {
        println!("  effective schedule:");
        for weekday in Weekday::ALL {
            let day = schedule.day(weekday);
            if day.is_schedulable() {
                println!("    {weekday:<9} {} to {}", day.open, day.close);
            } else {
                println!("    {weekday:<9} closed");
            }
        }
    }

    let date = args.date.as_deref().map(str::parse::<Date>).transpose()?;
    println!("  {}", resolve_pickup_day(date, schedule));

    let report = validate_order(&fixture.draft, schedule);
    if report.is_valid() {
        println!("draft: ready to submit");
    } else {
        println!("draft: not ready");
        for field in &report.missing_fields {
            println!("  missing: {field}");
        }
        for reason in &report.failure_reasons {
            println!("  {reason}");
        }
    }

    Ok(())
}
