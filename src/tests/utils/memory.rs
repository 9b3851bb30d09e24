use std::sync::Arc;

use actix_web::http::header::{self, HeaderName};
use chrono::Duration;
use tokio::sync::Mutex;

use crate::container::Container;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::infrastructure::repositories::account::mock::AccountRepositoryImpl;
use crate::infrastructure::repositories::user::mock::UserRepositoryImpl;
use crate::services::account::fixtures::account_service;
use crate::services::jsonwebtoken::JsonWebTokenServiceImpl;
use crate::services::user::UserServiceImpl;

use super::keys::keypair;

/// Container wired to in-memory repositories, for handler tests that need
/// no database.
pub struct MemoryContext {
    pub container: Arc<Container>,
    pub accounts: Arc<AccountRepositoryImpl>,
    jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
}

impl MemoryContext {
    pub fn new() -> Self {
        let (service, accounts) = account_service();

        let jsonwebtoken_service: Arc<dyn JsonWebTokenService> = Arc::new(
            JsonWebTokenServiceImpl::new(keypair(), "coffer", Duration::minutes(60)),
        );

        let container = Arc::new(Container {
            account_service: Arc::new(service),
            user_service: Arc::new(UserServiceImpl::new(Arc::new(UserRepositoryImpl {
                users: Mutex::new(Vec::new()),
            }))),
            jsonwebtoken_service: jsonwebtoken_service.clone(),
        });

        MemoryContext {
            container,
            accounts,
            jsonwebtoken_service,
        }
    }

    /// `Authorization` header carrying a valid token for `user_id`.
    pub fn bearer(&self, user_id: &str) -> (HeaderName, String) {
        let access_token = self
            .jsonwebtoken_service
            .generate_token(user_id.to_string())
            .unwrap();

        (header::AUTHORIZATION, format!("Bearer {}", access_token.token))
    }
}
