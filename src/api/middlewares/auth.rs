use crate::domain::error::AppError;
use crate::domain::models::user::CurrentUser;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, http::header, web};
use futures::future::{Ready, ready};
use std::sync::Arc;

pub const AUTH_COOKIE: &str = "Authorization";

/// Resolves the requester from the access token. Handlers taking this
/// extractor never run for anonymous requests.
#[derive(Debug)]
pub struct Authenticated {
    pub user: CurrentUser,
}

/// The bearer header takes precedence over the cookie.
fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let value = value.to_str().map_err(|_| AppError::Unauthorized())?;

        return value
            .strip_prefix("Bearer ")
            .map(|token| token.trim().to_string())
            .ok_or_else(AppError::Unauthorized);
    }

    req.cookie(AUTH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(AppError::Unauthorized)
}

fn authenticate(req: &HttpRequest) -> Result<Authenticated, AppError> {
    let jsonwebtoken_service = req
        .app_data::<web::Data<Arc<dyn JsonWebTokenService>>>()
        .ok_or_else(|| AppError::InternalError().trace("JsonWebTokenService is not defined"))?;

    let claims = jsonwebtoken_service.validate_token(get_token(req)?.trim())?;

    Ok(Authenticated {
        user: CurrentUser { id: claims.sub },
    })
}

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Authenticated, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = authenticate(req);

        if let Err(error) = &result {
            tracing::debug!(code = error.code, "request not authenticated");
        }

        ready(result)
    }
}
