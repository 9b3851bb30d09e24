use async_trait::async_trait;

use crate::domain::models::bank::Bank;

use super::repository::RepositoryResult;

#[async_trait]
pub trait BankRepository: Send + Sync {
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;
    async fn find_all(&self) -> RepositoryResult<Vec<Bank>>;
}
