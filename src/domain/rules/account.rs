//! Rules applied to an account creation form before anything touches storage.
//!
//! The rules only look at the submitted values. Whether the referenced bank
//! and account type actually exist is decided afterwards by the account
//! service, which reports it under the same field keys.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::domain::error::field_errors;
use crate::domain::models::account::{FieldErrors, FormFields};

use super::invalid;

pub const NAME: &str = "name";
pub const NUMBER: &str = "number";
pub const ACCOUNT_TYPE: &str = "account-type";
pub const BANK: &str = "bank";

pub const NAME_MAX_CHARS: usize = 255;
pub const NUMBER_MAX_DIGITS: usize = 34;

pub static INVALID_ACCOUNT_TYPE: &str = "The selected account-type is invalid.";
pub static INVALID_BANK: &str = "The selected bank is invalid.";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("identifier pattern"));

/// Values of an account form that passed every rule, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AccountFields {
    #[validate(custom(function = "is_account_name"))]
    pub name: String,

    #[validate(custom(function = "is_account_number"))]
    pub number: String,

    #[validate(custom(function = "is_account_type"))]
    pub account_type: String,

    #[validate(custom(function = "is_bank"))]
    pub bank: String,
}

impl AccountFields {
    fn from_fields(fields: &FormFields) -> Self {
        let value = |key: &str| {
            fields
                .get(key)
                .map(|value| value.trim().to_owned())
                .unwrap_or_default()
        };

        AccountFields {
            name: value(NAME),
            number: value(NUMBER),
            account_type: value(ACCOUNT_TYPE),
            bank: value(BANK),
        }
    }
}

/// Checks a submitted form. Fields other than the four account fields are ignored.
pub fn validate(fields: &FormFields) -> Result<AccountFields, FieldErrors> {
    let account = AccountFields::from_fields(fields);

    match account.validate() {
        Ok(()) => Ok(account),
        Err(errors) => Err(field_errors(&errors)
            .into_iter()
            .map(|(field, message)| (form_key(&field).to_owned(), message))
            .collect()),
    }
}

fn form_key(field: &str) -> &str {
    match field {
        "account_type" => ACCOUNT_TYPE,
        other => other,
    }
}

fn required(field: &'static str) -> ValidationError {
    let message: &'static str = match field {
        NAME => "The name field is required.",
        NUMBER => "The number field is required.",
        ACCOUNT_TYPE => "The account-type field is required.",
        _ => "The bank field is required.",
    };

    invalid(message)
}

fn is_account_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(required(NAME));
    }

    if name.chars().count() > NAME_MAX_CHARS {
        return Err(invalid("The name may not be greater than 255 characters."));
    }

    Ok(())
}

fn is_account_number(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(required(NUMBER));
    }

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("The number may only contain digits."));
    }

    if number.len() > NUMBER_MAX_DIGITS {
        return Err(invalid("The number may not be greater than 34 digits."));
    }

    Ok(())
}

fn is_account_type(id: &str) -> Result<(), ValidationError> {
    is_identifier(ACCOUNT_TYPE, id, INVALID_ACCOUNT_TYPE)
}

fn is_bank(id: &str) -> Result<(), ValidationError> {
    is_identifier(BANK, id, INVALID_BANK)
}

fn is_identifier(
    field: &'static str,
    id: &str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(required(field));
    }

    if !IDENTIFIER.is_match(id) {
        return Err(invalid(message));
    }

    Ok(())
}
