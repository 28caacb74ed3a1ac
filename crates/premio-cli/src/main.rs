//! # premio CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use premio_cli::claim::{run_claim, ClaimArgs};
use premio_cli::config;
use premio_cli::duplicate::{run_duplicate, DuplicateArgs};
use premio_cli::validate::{run_validate, ValidateArgs};
use premio_cli::verify::{run_verify, VerifyArgs};

/// QR-gated prize claim client.
///
/// Validates form fields locally, verifies QR codes against the remote
/// scripting endpoint, and registers prize claims.
#[derive(Parser, Debug)]
#[command(name = "premio", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gateway endpoint URL, overriding the config file and environment.
    #[arg(long, global = true)]
    endpoint: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one field value against its validation rule.
    Validate(ValidateArgs),

    /// Verify the QR code in a scanned page URL.
    Verify(VerifyArgs),

    /// Check whether a phone number or email is already registered.
    CheckDuplicate(DuplicateArgs),

    /// Claim a prize: verify the QR code, fill the form, and submit.
    Claim(ClaimArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("premio CLI starting");

    // Only commands that reach the gateway need settings.
    let settings = || config::resolve(cli.config.as_deref(), cli.endpoint.as_ref());

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Verify(args) => async { run_verify(args, &settings()?).await }.await,
        Commands::CheckDuplicate(args) => async { run_duplicate(args, &settings()?).await }.await,
        Commands::Claim(args) => async { run_claim(args, &settings()?).await }.await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_claim_with_global_flags() {
        let cli = Cli::try_parse_from([
            "premio",
            "-vv",
            "--endpoint",
            "https://script.example.com/exec",
            "claim",
            "https://premio.example/?qr=QR001",
            "--first-name",
            "Ana",
            "--phone",
            "3001234567",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.endpoint.is_some());
        match cli.command {
            Commands::Claim(args) => {
                assert_eq!(args.first_name, "Ana");
                assert_eq!(args.last_name, "");
                assert_eq!(args.page_url.query(), Some("qr=QR001"));
            }
            other => panic!("expected claim, got {other:?}"),
        }
    }

    #[test]
    fn check_duplicate_requires_a_contact() {
        let err = Cli::try_parse_from(["premio", "check-duplicate", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn check_duplicate_accepts_either_or_both_contacts() {
        for argv in [
            &["premio", "check-duplicate", "--phone", "3001234567"][..],
            &["premio", "check-duplicate", "--email", "ana@example.com"][..],
            &[
                "premio",
                "check-duplicate",
                "--phone",
                "3001234567",
                "--email",
                "ana@example.com",
            ][..],
        ] {
            assert!(Cli::try_parse_from(argv).is_ok(), "{argv:?}");
        }
    }

    #[test]
    fn rejects_unknown_field_name() {
        assert!(Cli::try_parse_from(["premio", "validate", "address", "x"]).is_err());
    }
}
