use std::sync::Arc;

use chrono::Duration;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::config::AppConfig;

use crate::domain::policies::account::AccountPolicy;
use crate::domain::services::account::AccountService;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::domain::services::user::UserService;

use crate::services::account::AccountServiceImpl;
use crate::services::jsonwebtoken::{JsonWebTokenServiceImpl, KeyPair};
use crate::services::user::UserServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::account_type::AccountTypeRepositoryImpl;
use crate::infrastructure::repositories::bank::BankRepositoryImpl;
use crate::infrastructure::repositories::user::UserRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub user_service: Arc<dyn UserService>,
    pub jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, keys: KeyPair, config: &AppConfig) -> Self {
        let db = Arc::new(conn);

        Container {
            account_service: account_service(db.clone()),
            user_service: Arc::new(UserServiceImpl::new(Arc::new(UserRepositoryImpl::new(
                db.clone(),
            )))),
            jsonwebtoken_service: Arc::new(JsonWebTokenServiceImpl::new(
                keys,
                config.service.name.as_str(),
                Duration::minutes(config.jsonwebtoken.ttl_minutes),
            )),
        }
    }
}

fn account_service(db: Arc<Surreal<Client>>) -> Arc<dyn AccountService> {
    Arc::new(AccountServiceImpl::new(
        Arc::new(AccountRepositoryImpl::new(db.clone())),
        Arc::new(BankRepositoryImpl::new(db.clone())),
        Arc::new(AccountTypeRepositoryImpl::new(db)),
        Arc::new(AccountPolicy),
    ))
}
