//! # Validate Subcommand
//!
//! Runs one field's local rule, exactly as the form does on every change.
//! No configuration or network access is needed.

use anyhow::Result;
use clap::Args;

use premio_core::{validate_field, Field};

/// Arguments for the `premio validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Field to check: first-name, last-name, phone or email.
    #[arg(value_name = "FIELD")]
    pub field: Field,

    /// Raw value as typed.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the value is accepted, 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    match validate_field(args.field, &args.value) {
        None => {
            println!("{}: OK", args.field.label());
            Ok(0)
        }
        Some(error) => {
            println!("{}: {error}", args.field.label());
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_value_exits_zero() {
        let args = ValidateArgs {
            field: Field::Phone,
            value: "3123456789".into(),
        };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn rejected_value_exits_one() {
        let args = ValidateArgs {
            field: Field::Email,
            value: "ab.com".into(),
        };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }
}
