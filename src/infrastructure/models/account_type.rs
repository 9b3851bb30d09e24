use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::domain::models::account_type::AccountType;

use super::record::key;

#[derive(Debug, Deserialize)]
pub struct SurrealAccountType {
    id: Thing,
    name: String,
}

impl From<SurrealAccountType> for AccountType {
    fn from(account_type: SurrealAccountType) -> Self {
        AccountType {
            id: key(&account_type.id),
            name: account_type.name,
        }
    }
}
