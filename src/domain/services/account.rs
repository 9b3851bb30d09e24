use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, FormFields, StoreOutcome};
use crate::domain::models::account_type::AccountType;
use crate::domain::models::bank::Bank;
use crate::domain::models::user::CurrentUser;

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    /// Validates a submitted form and persists the account only when it passes.
    async fn store(&self, user: &CurrentUser, fields: FormFields) -> AppResult<StoreOutcome>;
    async fn show(&self, user: &CurrentUser, id: &str) -> AppResult<Account>;
    async fn list(&self, user: &CurrentUser) -> AppResult<Vec<Account>>;
    async fn options(&self) -> AppResult<(Vec<Bank>, Vec<AccountType>)>;
}
