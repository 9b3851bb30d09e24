use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account_type::AccountType;
use crate::domain::repositories::account_type::AccountTypeRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::account_type::SurrealAccountType;
use crate::infrastructure::models::record::{ACCOUNT_TYPES, link};

pub struct AccountTypeRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountTypeRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountTypeRepository for AccountTypeRepositoryImpl {
    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let exists: Option<bool> = self
            .db
            .query("RETURN record::exists($account_type)")
            .bind(("account_type", link(ACCOUNT_TYPES, id)))
            .await?
            .take(0)?;

        Ok(exists.unwrap_or(false))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<AccountType>> {
        let account_types: Vec<SurrealAccountType> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY name")
            .bind(("table", ACCOUNT_TYPES))
            .await?
            .take(0)?;

        Ok(account_types.into_iter().map(Into::into).collect())
    }
}
