use std::collections::HashMap;
use std::sync::Arc;

use crate::api::ApiResult;
use crate::api::controllers::dashboard::DASHBOARD;
use crate::api::dto::account::{AccountDTO, AccountFormDTO};
use crate::api::middlewares::auth::Authenticated;
use crate::api::redirect::{self, Flash};
use crate::domain::error::AppError;
use crate::domain::models::account::StoreOutcome;
use crate::domain::services::account::AccountService;

use actix_web::{
    HttpRequest, HttpResponse, get, post,
    web::{Data as State, Form, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub const CREATE_FORM: &str = "accounts.create";

pub fn routes(cfg: &mut ServiceConfig) {
    // `/accounts/create` has to be matched before `/accounts/{id}`
    cfg.service(create).service(store).service(show);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountFormDTO, description = "Flashed errors and input, banks and account types"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
    security(("jsonwebtoken" = []))
)]
#[get("/accounts/create", name = "accounts.create")]
pub async fn create(
    req: HttpRequest,
    _auth: Authenticated,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let (banks, account_types) = account_service.options().await?;

    let form = AccountFormDTO::new(redirect::take_flash(&req), banks, account_types);

    Ok(HttpResponse::Ok()
        .cookie(redirect::forget_flash())
        .json(form))
}

#[utoipa::path(
    responses(
        (status = 303, description = "Created, redirects to the dashboard. Rejected, redirects to the form with a flash cookie"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(
        content = HashMap<String, String>,
        content_type = "application/x-www-form-urlencoded",
        description = "Fields `name`, `number`, `account-type` and `bank`"
    ),
    tag = "Account",
    security(("jsonwebtoken" = []))
)]
#[post("/accounts", name = "accounts.store")]
pub async fn store(
    req: HttpRequest,
    auth: Authenticated,
    form: Form<HashMap<String, String>>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    match account_service.store(&auth.user, form.into_inner()).await? {
        StoreOutcome::Created(_) => redirect::to_route(&req, DASHBOARD),
        StoreOutcome::Rejected { errors, input } => {
            redirect::back_with(&req, CREATE_FORM, &Flash { errors, input })
        }
    }
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
    security(("jsonwebtoken" = []))
)]
#[get("/accounts/{id}", name = "accounts.show")]
pub async fn show(
    auth: Authenticated,
    id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.show(&auth.user, &id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}
