use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use utoipa::ToSchema;

use crate::api::redirect::Flash;
use crate::domain::models::account::Account;
use crate::domain::models::account_type::AccountType;
use crate::domain::models::bank::Bank;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("x8f2kq0c9d"))]
    id: String,
    #[schema(examples("1"))]
    bank_id: String,
    #[schema(examples("1"))]
    type_id: String,
    #[schema(examples("Household"))]
    name: String,
    #[schema(examples("1111"))]
    number: String,
    #[schema(examples("2016-05-04T13:41:23+00:00"))]
    created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BankDTO {
    id: String,
    name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountTypeDTO {
    id: String,
    name: String,
}

/// Everything needed to render the account creation form.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountFormDTO {
    errors: BTreeMap<String, String>,
    input: HashMap<String, String>,
    banks: Vec<BankDTO>,
    account_types: Vec<AccountTypeDTO>,
}

impl AccountFormDTO {
    pub fn new(flash: Flash, banks: Vec<Bank>, account_types: Vec<AccountType>) -> Self {
        AccountFormDTO {
            errors: flash.errors,
            input: flash.input,
            banks: banks.into_iter().map(Into::into).collect(),
            account_types: account_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Account> for AccountDTO {
    fn from(account: Account) -> Self {
        AccountDTO {
            id: account.id,
            bank_id: account.bank_id,
            type_id: account.type_id,
            name: account.name,
            number: account.number,
            created_at: account.created_at.to_rfc3339(),
        }
    }
}

impl From<Bank> for BankDTO {
    fn from(bank: Bank) -> Self {
        BankDTO {
            id: bank.id,
            name: bank.name,
        }
    }
}

impl From<AccountType> for AccountTypeDTO {
    fn from(account_type: AccountType) -> Self {
        AccountTypeDTO {
            id: account_type.id,
            name: account_type.name,
        }
    }
}
