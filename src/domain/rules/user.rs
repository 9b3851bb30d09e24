use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use super::invalid;

static STRONG_PASSWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[^A-Z]*[A-Z])[^a-z]*[a-z][^0-9]*[0-9][^#?!@$%^&*-]*[#?!@$%^&*-].*$")
        .expect("strong password pattern")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if !(3..=255).contains(&email.len()) {
        return Err(invalid("Email must contain between 3 and 255 characters"));
    }

    if !EMAIL.is_match(email) {
        return Err(invalid("Invalid email format"));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if !(8..=72).contains(&password.len()) {
        return Err(invalid("Password must contain between 8 and 72 characters"));
    }

    if !STRONG_PASSWORD.is_match(password) {
        return Err(invalid(
            "Password must contain at least one uppercase letter, one lowercase letter, one digit and one special character",
        ));
    }

    Ok(())
}

pub fn is_user_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < 3 {
        return Err(invalid("Name must have at least 3 characters"));
    }

    Ok(())
}
