use std::sync::Arc;

use actix_web::{HttpResponse, get, web::Data as State};
use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::ApiResult;
use crate::api::dto::account::AccountDTO;
use crate::api::middlewares::auth::Authenticated;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

pub const DASHBOARD: &str = "dashboard";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(index);
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>, description = "Accounts of the current user, newest first"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
    security(("jsonwebtoken" = []))
)]
#[get("/dashboard", name = "dashboard")]
pub async fn index(
    auth: Authenticated,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let accounts = account_service.list(&auth.user).await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}
