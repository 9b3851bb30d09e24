use std::sync::Arc;

use crate::api::ApiResult;
use crate::api::dto::user::{AccessTokenDTO, CredentialsDTO, SignupDTO, UserDTO};
use crate::api::middlewares::auth::AUTH_COOKIE;
use crate::api::middlewares::validate::ValidJson;
use crate::domain::error::AppError;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::domain::services::user::UserService;

use actix_web::{
    HttpResponse,
    cookie::time::OffsetDateTime,
    cookie::{Cookie, SameSite},
    post,
    web::Data as State,
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(signin);
}

#[utoipa::path(
    responses(
        (status = 200, body = UserDTO, description = "User registered"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = SignupDTO,
    tag = "User",
)]
#[post("/signup")]
pub async fn signup(
    payload: ValidJson<SignupDTO>,
    user_service: State<Arc<dyn UserService>>,
) -> ApiResult {
    let user = user_service.signup(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(UserDTO::from(user)))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccessTokenDTO, description = "Signed in, token also set as cookie"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "User"
)]
#[post("/signin")]
pub async fn signin(
    payload: ValidJson<CredentialsDTO>,
    user_service: State<Arc<dyn UserService>>,
    jsonwebtoken_service: State<Arc<dyn JsonWebTokenService>>,
) -> ApiResult {
    let user = user_service.signin(payload.into_inner().into()).await?;

    let access_token = jsonwebtoken_service.generate_token(user.id)?;

    let expires = OffsetDateTime::from_unix_timestamp(access_token.expiration)
        .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

    let cookie = Cookie::build(AUTH_COOKIE, &access_token.token)
        .http_only(true)
        .secure(true)
        .path("/")
        .same_site(SameSite::Strict)
        .expires(expires)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(AccessTokenDTO {
        token: access_token.token,
        expires_at: access_token.expiration,
    }))
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        dev::ServiceResponse,
        http::StatusCode,
        test::{self, TestRequest},
    };
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn signup(data: Value) -> ServiceResponse {
        let app =
            test::init_service(App::new().into_utoipa_app().configure(routes).into_app()).await;

        TestRequest::post()
            .uri("/signup")
            .set_json(data)
            .send_request(&app)
            .await
    }

    #[rstest]
    #[case::invalid_email("Ada Saver", "not-an-email", "stR0ngP4ssw0rd!", "Invalid email format")]
    #[case::weak_password(
        "Ada Saver",
        "ada@coffer.dev",
        "weak",
        "Password must contain between 8 and 72 characters"
    )]
    #[case::short_name("Ab", "ada@coffer.dev", "stR0ngP4ssw0rd!", "Name must have at least 3 characters")]
    #[case::password_without_special_char(
        "Ada Saver",
        "ada@coffer.dev",
        "Password123",
        "Password must contain at least one uppercase letter, one lowercase letter, one digit and one special character"
    )]
    #[actix_web::test]
    async fn test_signup_rejects_invalid_field(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] message: &str,
    ) {
        let res = signup(json!({ "name": name, "email": email, "password": password })).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 422);
        assert!(err.message.contains(message));
    }

    #[rstest]
    #[case::missing_name(json!({ "email": "ada@coffer.dev", "password": "stR0ngP4ssw0rd!" }))]
    #[case::missing_email(json!({ "name": "Ada Saver", "password": "stR0ngP4ssw0rd!" }))]
    #[case::missing_password(json!({ "name": "Ada Saver", "email": "ada@coffer.dev" }))]
    #[actix_web::test]
    async fn test_signup_missing_field(#[case] payload: Value) {
        let res = signup(payload).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 400);
    }

    #[actix_web::test]
    async fn test_signup_email_too_long() {
        let long_email = format!("{}@example.com", "a".repeat(250));

        let res = signup(json!({
            "name": "Ada Saver",
            "email": long_email,
            "password": "stR0ngP4ssw0rd!"
        }))
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert!(
            err.message
                .contains("Email must contain between 3 and 255 characters")
        );
    }
}
