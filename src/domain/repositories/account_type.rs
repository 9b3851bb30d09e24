use async_trait::async_trait;

use crate::domain::models::account_type::AccountType;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountTypeRepository: Send + Sync {
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;
    async fn find_all(&self) -> RepositoryResult<Vec<AccountType>>;
}
