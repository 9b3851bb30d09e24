use actix_web::HttpResponse;
use utoipa_actix_web::{scope, service_config::ServiceConfig};

use crate::domain::error::AppResult;

mod controllers;
mod dto;
mod middlewares;
mod redirect;

pub type ApiResult = AppResult<HttpResponse>;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api/v1").configure(controllers::user::routes));

    controllers::dashboard::routes(cfg);
    controllers::account::routes(cfg);
}
