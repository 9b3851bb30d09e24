use async_trait::async_trait;

use crate::domain::models::user::{CreateUser, User};

use super::repository::RepositoryResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn email_taken(&self, email: &str) -> RepositoryResult<bool>;
    /// Fails with a duplicate when the email is already registered, even if
    /// `email_taken` reported it free moments before.
    async fn insert(&self, new_user: CreateUser) -> RepositoryResult<User>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}
