use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::bank::Bank;
use crate::domain::repositories::bank::BankRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::models::bank::SurrealBank;
use crate::infrastructure::models::record::{BANKS, link};

pub struct BankRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl BankRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BankRepository for BankRepositoryImpl {
    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let exists: Option<bool> = self
            .db
            .query("RETURN record::exists($bank)")
            .bind(("bank", link(BANKS, id)))
            .await?
            .take(0)?;

        Ok(exists.unwrap_or(false))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Bank>> {
        let banks: Vec<SurrealBank> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY name")
            .bind(("table", BANKS))
            .await?
            .take(0)?;

        Ok(banks.into_iter().map(Into::into).collect())
    }
}
