// File: src/commands/check.rs
// Purpose: `daan check`: run one validation rule on one value

use anyhow::{Context, Result};
use clap::ValueEnum;
use daan_validation::{self as rules, FileMeta, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckRule {
    Email,
    Password,
    /// `--aux` holds the password to compare against
    ConfirmPassword,
    Phone,
    Pan,
    Name,
    /// `--aux` holds the field label used in the message
    Required,
    Website,
    AccessCode,
    /// Value is file metadata as JSON, empty for no file
    File,
}

pub fn evaluate(
    rule: CheckRule,
    value: &str,
    aux: Option<&str>,
    required: bool,
) -> Result<ValidationResult> {
    let result = match rule {
        CheckRule::Email => rules::validate_email(value),
        CheckRule::Password => rules::validate_password(value),
        CheckRule::ConfirmPassword => {
            rules::validate_confirm_password(aux.unwrap_or_default(), value)
        }
        CheckRule::Phone if required => rules::validate_required_phone(value),
        CheckRule::Phone => rules::validate_phone(value),
        CheckRule::Pan if required => rules::validate_required_pan(value),
        CheckRule::Pan => rules::validate_pan(value),
        CheckRule::Name => rules::validate_name(value),
        CheckRule::Required => rules::validate_required(value, aux.unwrap_or("Field")),
        CheckRule::Website => rules::validate_website(value),
        CheckRule::AccessCode => rules::validate_access_code(value),
        CheckRule::File => {
            let file = if value.trim().is_empty() {
                None
            } else {
                let meta: FileMeta = serde_json::from_str(value)
                    .context("file value must be FileMeta JSON")?;
                Some(meta)
            };
            rules::validate_file(file.as_ref(), required)
        }
    };
    Ok(result)
}

pub fn run(rule: CheckRule, value: &str, aux: Option<&str>, required: bool) -> Result<()> {
    let result = evaluate(rule, value, aux, required)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
