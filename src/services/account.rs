use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    error::{AppError, AppResult},
    models::{
        account::{Account, CreateAccount, FieldErrors, FormFields, StoreOutcome},
        account_type::AccountType,
        bank::Bank,
        user::CurrentUser,
    },
    policies::Authorizer,
    repositories::{
        account::AccountRepository, account_type::AccountTypeRepository, bank::BankRepository,
    },
    rules::account::{self as rules, AccountFields},
    services::account::AccountService,
};

pub struct AccountServiceImpl {
    accounts: Arc<dyn AccountRepository>,
    banks: Arc<dyn BankRepository>,
    account_types: Arc<dyn AccountTypeRepository>,
    policy: Arc<dyn Authorizer<Account>>,
}

impl AccountServiceImpl {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        banks: Arc<dyn BankRepository>,
        account_types: Arc<dyn AccountTypeRepository>,
        policy: Arc<dyn Authorizer<Account>>,
    ) -> Self {
        Self {
            accounts,
            banks,
            account_types,
            policy,
        }
    }

    async fn missing_references(&self, fields: &AccountFields) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();

        if !self.account_types.exists(&fields.account_type).await? {
            errors.insert(
                rules::ACCOUNT_TYPE.to_string(),
                rules::INVALID_ACCOUNT_TYPE.to_string(),
            );
        }

        if !self.banks.exists(&fields.bank).await? {
            errors.insert(rules::BANK.to_string(), rules::INVALID_BANK.to_string());
        }

        Ok(errors)
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(skip(self, fields), fields(user_id = %user.id))]
    async fn store(&self, user: &CurrentUser, fields: FormFields) -> AppResult<StoreOutcome> {
        let validated = match rules::validate(&fields) {
            Ok(validated) => validated,
            Err(errors) => {
                tracing::info!(fields = ?errors.keys(), "account form rejected");
                return Ok(StoreOutcome::Rejected {
                    errors,
                    input: fields,
                });
            }
        };

        let errors = self.missing_references(&validated).await?;

        if !errors.is_empty() {
            tracing::info!(fields = ?errors.keys(), "account form references unknown rows");
            return Ok(StoreOutcome::Rejected {
                errors,
                input: fields,
            });
        }

        let account = self
            .accounts
            .insert(CreateAccount {
                user_id: user.id.clone(),
                bank_id: validated.bank,
                type_id: validated.account_type,
                name: validated.name,
                number: validated.number,
            })
            .await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(StoreOutcome::Created(account))
    }

    #[tracing::instrument(skip(self), fields(user_id = %user.id))]
    async fn show(&self, user: &CurrentUser, id: &str) -> AppResult<Account> {
        let account = match self.accounts.find_by_id(id).await? {
            Some(account) => account,
            None => return Err(AppError::NotFound("Account not found")),
        };

        if !self.policy.can_access(user, &account) {
            tracing::warn!(account_id = %account.id, "account access denied");
            return Err(AppError::Forbidden());
        }

        Ok(account)
    }

    async fn list(&self, user: &CurrentUser) -> AppResult<Vec<Account>> {
        Ok(self.accounts.find_by_user(&user.id).await?)
    }

    async fn options(&self) -> AppResult<(Vec<Bank>, Vec<AccountType>)> {
        let banks = self.banks.find_all().await?;
        let account_types = self.account_types.find_all().await?;

        Ok((banks, account_types))
    }
}
