//! # Verify Subcommand
//!
//! Runs the load-time QR gate for a scanned page URL and reports which view
//! the visitor would get.

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use premio_form::{ClaimPhase, ClaimSession, InvalidReason};
use premio_gateway::GatewayClient;

use crate::config::Settings;

/// Arguments for the `premio verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// The scanned page URL, e.g. `https://premio.example/?qr=QR001`.
    #[arg(value_name = "PAGE_URL")]
    pub page_url: Url,

    /// Print the session snapshot as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 if the form would open, 1 if the code is invalid.
pub async fn run_verify(args: &VerifyArgs, settings: &Settings) -> Result<u8> {
    let client =
        GatewayClient::new(settings.gateway.clone()).context("failed to build gateway client")?;
    let session = ClaimSession::load(&client, &args.page_url, settings.submission).await?;

    if args.json {
        crate::print_json(&session.snapshot())?;
    } else {
        print_gate(&session);
    }

    Ok(if session.phase() == ClaimPhase::FormReady {
        0
    } else {
        1
    })
}

/// Print the outcome of the QR gate in human-readable form.
pub(crate) fn print_gate(session: &ClaimSession) {
    match (session.phase(), session.invalid_reason()) {
        (ClaimPhase::FormReady, _) => {
            let code = session.qr_code().map(|c| c.as_str()).unwrap_or_default();
            println!("QR code {code} is active: claim form available");
        }
        (_, Some(InvalidReason::MissingCode)) => {
            println!("Invalid QR code: the page URL carries no QR code");
        }
        (_, Some(InvalidReason::Inactive { message })) => {
            println!("Invalid QR code: this code is not enabled or does not exist");
            if let Some(m) = message {
                println!("  {m}");
            }
        }
        (phase, None) => println!("Claim phase: {phase}"),
    }
}
