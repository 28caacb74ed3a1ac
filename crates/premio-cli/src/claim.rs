//! # Claim Subcommand
//!
//! Drives a whole page visit: QR gate, field entry through the change
//! handler, then submission. Field values given on the command line are
//! applied one at a time, in form order, so the per-field rules run exactly
//! as they would on input.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use premio_core::Field;
use premio_form::{ClaimPhase, ClaimSession};
use premio_gateway::GatewayClient;

use crate::config::Settings;

/// Arguments for the `premio claim` subcommand.
#[derive(Args, Debug)]
pub struct ClaimArgs {
    /// The scanned page URL, e.g. `https://premio.example/?qr=QR001`.
    #[arg(value_name = "PAGE_URL")]
    pub page_url: Url,

    /// Winner's first name.
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Winner's last name.
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Winner's phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Winner's email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Print the final session snapshot as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl ClaimArgs {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }
}

/// Execute the claim subcommand.
///
/// Returns exit code: 0 if the claim was registered, 1 if the QR code was
/// invalid or the submission was rejected.
pub async fn run_claim(args: &ClaimArgs, settings: &Settings) -> Result<u8> {
    let client =
        GatewayClient::new(settings.gateway.clone()).context("failed to build gateway client")?;
    let mut session = ClaimSession::load(&client, &args.page_url, settings.submission).await?;

    if session.phase() != ClaimPhase::FormReady {
        if args.json {
            crate::print_json(&session.snapshot())?;
        } else {
            crate::verify::print_gate(&session);
        }
        return Ok(1);
    }

    for field in Field::ALL {
        if let Some(error) = session.handle_change(field, args.value(field)) {
            if !args.json {
                println!("{}: {error}", field.label());
            }
        }
    }

    let outcome = session.submit(&client).await;

    if args.json {
        crate::print_json(&session.snapshot())?;
    }

    match outcome {
        Ok(result) => {
            if !args.json {
                println!("Prize claimed! Check your email for your winning ticket.");
                if let Some(m) = result.message {
                    println!("  {m}");
                }
            }
            Ok(0)
        }
        Err(rejection) => {
            if !args.json {
                println!("Claim not registered: {rejection}");
            }
            Ok(1)
        }
    }
}
