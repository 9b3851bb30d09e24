use std::borrow::Cow;

use validator::ValidationError;

pub mod account;
pub mod user;

fn invalid(message: &'static str) -> ValidationError {
    ValidationError::new("0").with_message(Cow::from(message))
}
