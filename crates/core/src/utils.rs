//! Utils

use clap::Parser;

/// Arguments for the checkout examples
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Fixture set to use for the cart & schedules
    #[clap(short, long, default_value = "produce-stand")]
    pub fixture: String,

    /// Candidate pickup date (YYYY-MM-DD)
    #[clap(short, long)]
    pub date: Option<String>,
}
