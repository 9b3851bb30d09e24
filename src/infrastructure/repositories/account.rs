use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};
use crate::infrastructure::models::record::{ACCOUNT_TYPES, ACCOUNTS, BANKS, USERS, link};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }

    /// Reports the first link of `account` that points at no record. The field
    /// assertions on `accounts` still reject anything that slips past.
    async fn ensure_references(&self, account: &CreateAccount) -> RepositoryResult<()> {
        let references = [
            (BANKS, &account.bank_id),
            (ACCOUNT_TYPES, &account.type_id),
            (USERS, &account.user_id),
        ];

        let exists: Vec<bool> = self
            .db
            .query("RETURN [record::exists($bank), record::exists($type), record::exists($user)]")
            .bind(("bank", link(BANKS, &account.bank_id)))
            .bind(("type", link(ACCOUNT_TYPES, &account.type_id)))
            .bind(("user", link(USERS, &account.user_id)))
            .await?
            .take(0)?;

        match references
            .into_iter()
            .zip(exists)
            .find(|(_, exists)| !exists)
        {
            Some(((table, id), _)) => Err(RepositoryError::MissingReference {
                table,
                id: id.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn insert(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        self.ensure_references(&new_account).await?;

        let account: Option<SurrealAccount> = self
            .db
            .create(ACCOUNTS)
            .content(SurrealAccountCreate::from(new_account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNTS))
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query("SELECT * FROM $account")
            .bind(("account", link(ACCOUNTS, id)))
            .await?
            .take(0)?;

        Ok(account.map(Into::into))
    }

    async fn find_by_user(&self, user_id: &str) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE user_id = $user ORDER BY created_at DESC")
            .bind(("table", ACCOUNTS))
            .bind(("user", link(USERS, user_id)))
            .await?
            .take(0)?;

        Ok(accounts.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
pub mod mock {
    use chrono::Utc;
    use tokio::sync::Mutex;

    use super::*;

    /// In-memory store that rejects dangling bank and type references like the
    /// schema assertions do.
    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
        pub banks: Vec<String>,
        pub account_types: Vec<String>,
    }

    impl AccountRepositoryImpl {
        pub fn new(banks: &[&str], account_types: &[&str]) -> Self {
            Self {
                accounts: Mutex::new(Vec::new()),
                banks: banks.iter().map(ToString::to_string).collect(),
                account_types: account_types.iter().map(ToString::to_string).collect(),
            }
        }
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn insert(&self, account: CreateAccount) -> RepositoryResult<Account> {
            if !self.banks.contains(&account.bank_id) {
                return Err(RepositoryError::MissingReference {
                    table: BANKS,
                    id: account.bank_id,
                });
            }

            if !self.account_types.contains(&account.type_id) {
                return Err(RepositoryError::MissingReference {
                    table: ACCOUNT_TYPES,
                    id: account.type_id,
                });
            }

            let mut accounts = self.accounts.lock().await;

            let now = Utc::now();
            let acc = Account {
                id: (accounts.len() + 1).to_string(),
                user_id: account.user_id,
                bank_id: account.bank_id,
                type_id: account.type_id,
                name: account.name,
                number: account.number,
                created_at: now,
                updated_at: now,
            };

            accounts.push(acc.clone());

            Ok(acc)
        }

        async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
            let accounts = self.accounts.lock().await;

            Ok(accounts.iter().find(|a| a.id == id).cloned())
        }

        async fn find_by_user(&self, user_id: &str) -> RepositoryResult<Vec<Account>> {
            let accounts = self.accounts.lock().await;

            Ok(accounts
                .iter()
                .rev()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        }
    }
}
