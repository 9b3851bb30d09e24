use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite},
    http::header,
};
use serde::{Deserialize, Serialize};

use crate::api::ApiResult;
use crate::domain::error::AppError;
use crate::domain::models::account::{FieldErrors, FormFields};
use crate::domain::rules::account::NAME_MAX_CHARS;

pub const FLASH_COOKIE: &str = "flash";

/// Upper bound of the encoded `Set-Cookie` value. Browsers drop larger cookies.
pub const FLASH_MAX_BYTES: usize = 4096;

/// Echoed values are cut to this many characters, one past the longest value
/// any account field accepts.
const INPUT_MAX_CHARS: usize = NAME_MAX_CHARS + 1;

/// State carried across a redirect so a form can be shown again with the
/// previous values and the reasons they were refused.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub errors: FieldErrors,
    pub input: FormFields,
}

fn location(req: &HttpRequest, route: &str) -> Result<String, AppError> {
    req.url_for_static(route)
        .map(|url| url.to_string())
        .map_err(|err| AppError::InternalError().trace(&format!("route {route}: {err}")))
}

/// `303 See Other` to a named route.
pub fn to_route(req: &HttpRequest, route: &str) -> ApiResult {
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location(req, route)?))
        .finish())
}

/// `303 See Other` to a named route with `flash` attached as a cookie.
pub fn back_with(req: &HttpRequest, route: &str, flash: &Flash) -> ApiResult {
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location(req, route)?))
        .append_header((header::SET_COOKIE, flash_cookie(flash)?))
        .finish())
}

/// Encodes `flash` within [`FLASH_MAX_BYTES`]. Long values are truncated, then
/// the largest inputs are left out until the cookie fits. Errors are always kept.
fn flash_cookie(flash: &Flash) -> Result<String, AppError> {
    let mut bounded = Flash {
        errors: flash.errors.clone(),
        input: flash
            .input
            .iter()
            .map(|(field, value)| (field.clone(), value.chars().take(INPUT_MAX_CHARS).collect()))
            .collect(),
    };

    loop {
        let value = serde_json::to_string(&bounded)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        let cookie = Cookie::build(FLASH_COOKIE, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish();

        // Submitted values may contain `;` or `%`, so the cookie is percent-encoded.
        let encoded = cookie.encoded().to_string();

        if encoded.len() <= FLASH_MAX_BYTES {
            return Ok(encoded);
        }

        let largest = bounded
            .input
            .iter()
            .max_by_key(|(field, value)| field.len() + value.len())
            .map(|(field, _)| field.clone());

        match largest {
            Some(field) => {
                bounded.input.remove(&field);
            }
            None => {
                return Err(AppError::InternalError().trace("flash errors exceed the cookie size"));
            }
        }
    }
}

/// Reads the flashed state. A missing or unreadable cookie yields an empty flash.
pub fn take_flash(req: &HttpRequest) -> Flash {
    req.cookie(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

pub fn forget_flash() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
