use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fails with a missing reference when the user, bank or type does not exist.
    async fn insert(&self, new_account: CreateAccount) -> RepositoryResult<Account>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Account>>;
    async fn find_by_user(&self, user_id: &str) -> RepositoryResult<Vec<Account>>;
}
