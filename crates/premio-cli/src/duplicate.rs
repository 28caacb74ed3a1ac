//! # Check-Duplicate Subcommand
//!
//! Asks the remote service whether a phone number or email already claimed
//! a prize.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};

use premio_gateway::{GatewayClient, PrizeGateway};

use crate::config::Settings;

/// Arguments for the `premio check-duplicate` subcommand.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("contact")
        .args(["phone", "email"])
        .required(true)
        .multiple(true)
))]
pub struct DuplicateArgs {
    /// Phone number to look up.
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address to look up.
    #[arg(long)]
    pub email: Option<String>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check-duplicate subcommand.
///
/// Returns exit code: 0 if not a duplicate, 1 if a duplicate, 2 if the check
/// could not be completed.
pub async fn run_duplicate(args: &DuplicateArgs, settings: &Settings) -> Result<u8> {
    let client =
        GatewayClient::new(settings.gateway.clone()).context("failed to build gateway client")?;
    let check = client
        .verify_duplicate(args.phone.as_deref(), args.email.as_deref())
        .await;

    if args.json {
        crate::print_json(&check)?;
    } else if check.indeterminate {
        println!("Duplicate check unavailable");
    } else if check.duplicate {
        println!(
            "Duplicate: phone={} email={}",
            check.phone_duplicate, check.email_duplicate
        );
    } else {
        println!("Not registered");
    }
    if !args.json {
        if let Some(m) = &check.message {
            println!("  {m}");
        }
    }

    Ok(match (check.indeterminate, check.duplicate) {
        (true, _) => 2,
        (false, true) => 1,
        (false, false) => 0,
    })
}
