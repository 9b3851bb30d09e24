use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::user::{CreateUser, Credentials, User};

#[async_trait]
pub trait UserService: 'static + Sync + Send {
    async fn signup(&self, new_user: CreateUser) -> AppResult<User>;
    async fn signin(&self, credentials: Credentials) -> AppResult<User>;
}
