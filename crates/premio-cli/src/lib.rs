//! # premio-cli — Command-Line Driver for the Prize Claim
//!
//! Provides the `premio` command-line interface.
//!
//! ## Subcommands
//!
//! - `premio validate` — Run one field's local validation rule.
//! - `premio verify` — Run the load-time QR gate for a page URL.
//! - `premio check-duplicate` — Ask whether a phone or email is registered.
//! - `premio claim` — Full visit: QR gate, field entry, submission.
//!
//! ```bash
//! premio validate phone 3123456789
//! premio --endpoint https://script.example.com/exec verify 'https://premio.example/?qr=QR001'
//! premio --config premio.yaml claim 'https://premio.example/?qr=QR001' \
//!     --first-name Ana --last-name Gómez --phone 3001234567 --email ana@example.com
//! ```

pub mod claim;
pub mod config;
pub mod duplicate;
pub mod validate;
pub mod verify;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}
