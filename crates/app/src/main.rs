//! Harvest marketplace checkout CLI

use std::process;

use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use harvest::{
    fixtures::Fixture,
    schedule::{Weekday, WeeklySchedule},
    validation::ValidationReport,
};
use harvest_app::{
    checkout::{CheckoutError, CheckoutSession},
    config::{ApiConfig, LoggingConfig},
    domain::{
        carts::{CartStore, JsonFileCartStore, StoredCart},
        farmers::{FarmersService, FarmersServiceError, HttpFarmersService},
        orders::HttpOrdersService,
    },
    observability,
};
use jiff::civil::Date;
use tabled::{Table, Tabled, settings::Style};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "harvest-app", about = "Harvest marketplace checkout CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show fulfillment availability and pickup-day status for a fixture cart
    Availability(AvailabilityArgs),

    /// Validate a fixture's order draft
    Validate(ValidateArgs),

    /// Submit an order draft to the marketplace API
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
struct AvailabilityArgs {
    /// Fixture set name
    #[arg(long, default_value = "produce-stand")]
    fixture: String,

    /// Candidate pickup date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Fixture set name
    #[arg(long, default_value = "produce-stand")]
    fixture: String,
}

#[derive(Debug, Args)]
struct SubmitArgs {
    #[command(flatten)]
    api: ApiConfig,

    /// Fixture set used when no saved cart exists
    #[arg(long, default_value = "produce-stand")]
    fixture: String,
}

/// Serves a fixture's declared business hours in place of the live API.
#[derive(Debug)]
struct FixtureFarmers(Option<WeeklySchedule>);

#[async_trait]
impl FarmersService for FixtureFarmers {
    async fn business_hours(
        &self,
        _farmer: Uuid,
    ) -> Result<Option<WeeklySchedule>, FarmersServiceError> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    observability::init_subscriber(&cli.logging);

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Availability(args) => show_availability(args).await,
        Commands::Validate(args) => validate(args).await,
        Commands::Submit(args) => submit(args).await,
    }
}

fn fixture_session(fixture: &Fixture) -> Result<CheckoutSession, String> {
    CheckoutSession::new(StoredCart {
        farmer: fixture.farmer.clone(),
        items: fixture.items.clone(),
    })
    .map_err(|error| error.to_string())
}

async fn show_availability(args: AvailabilityArgs) -> Result<(), String> {
    let fixture = Fixture::from_set(&args.fixture).map_err(|error| error.to_string())?;

    let mut session = fixture_session(&fixture)?;
    session
        .ensure_business_hours(&FixtureFarmers(fixture.business_hours.clone()))
        .await;

    let availability = session.availability();

    println!(
        "cart for {}: {} item(s)",
        fixture.farmer.name,
        session.cart().items.len()
    );
    println!(
        "  delivery: {}",
        if availability.delivery { "offered" } else { "unavailable" }
    );
    println!(
        "  pickup:   {}",
        if availability.pickup { "offered" } else { "unavailable" }
    );

    if availability.needs_business_hours {
        println!("  pickup hours come from the farmer's business hours");
    }

    if let Some(schedule) = session.effective_schedule() {
        println!("{}", schedule_table(schedule));
    }

    let date = args
        .date
        .map(|raw| raw.parse::<Date>())
        .transpose()
        .map_err(|error| error.to_string())?;

    println!("{}", session.pickup_day_status(date));

    Ok(())
}

async fn validate(args: ValidateArgs) -> Result<(), String> {
    let fixture = Fixture::from_set(&args.fixture).map_err(|error| error.to_string())?;

    let mut session = fixture_session(&fixture)?;
    *session.draft_mut() = fixture.draft.clone();

    session
        .ensure_business_hours(&FixtureFarmers(fixture.business_hours.clone()))
        .await;

    let report = session.validate();

    if report.is_valid() {
        println!("order draft is ready to submit");
        return Ok(());
    }

    print_report(&report);

    Err("order draft is incomplete".to_string())
}

async fn submit(args: SubmitArgs) -> Result<(), String> {
    let store = JsonFileCartStore::new(&args.api.cart_path);

    let (cart, fixture) = match store.load().map_err(|error| error.to_string())? {
        Some(cart) => (cart, None),
        None => {
            let fixture = Fixture::from_set(&args.fixture).map_err(|error| error.to_string())?;

            (
                StoredCart {
                    farmer: fixture.farmer.clone(),
                    items: fixture.items.clone(),
                },
                Some(fixture),
            )
        }
    };

    let mut session = CheckoutSession::new(cart).map_err(|error| error.to_string())?;

    if let Some(fixture) = fixture {
        *session.draft_mut() = fixture.draft;
        session
            .ensure_business_hours(&FixtureFarmers(fixture.business_hours))
            .await;
    } else {
        let farmers = HttpFarmersService::new(args.api.api_url.clone());
        session.ensure_business_hours(&farmers).await;
    }

    let orders = HttpOrdersService::new(args.api.api_url);

    match session.submit(&orders).await {
        Ok(created) => {
            store.clear().map_err(|error| error.to_string())?;
            println!("order created: {}", created.uuid);

            Ok(())
        }
        Err(CheckoutError::Invalid(report)) => {
            print_report(&report);

            Err("order draft is incomplete".to_string())
        }
        Err(error) => Err(error.to_string()),
    }
}

fn print_report(report: &ValidationReport) {
    for field in &report.missing_fields {
        println!("  missing: {field}");
    }
    for reason in &report.failure_reasons {
        println!("  {reason}");
    }
}

#[derive(Debug, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Day")]
    day: &'static str,

    #[tabled(rename = "Hours")]
    hours: String,
}

fn schedule_table(schedule: &WeeklySchedule) -> String {
    let rows = Weekday::ALL.map(|weekday| {
        let day = schedule.day(weekday);

        let hours = if day.is_schedulable() {
            format!("{} to {}", day.open, day.close)
        } else {
            "closed".to_string()
        };

        ScheduleRow {
            day: weekday.name(),
            hours,
        }
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
