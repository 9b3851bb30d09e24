use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::domain::models::account::{Account, CreateAccount};

use super::record::{ACCOUNT_TYPES, BANKS, USERS, key, link};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    user_id: Thing,
    bank_id: Thing,
    type_id: Thing,
    name: String,
    number: String,
    created_at: Datetime,
    updated_at: Datetime,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    user_id: Thing,
    bank_id: Thing,
    type_id: Thing,
    name: String,
    number: String,
}

impl From<CreateAccount> for SurrealAccountCreate {
    fn from(acc: CreateAccount) -> Self {
        SurrealAccountCreate {
            user_id: link(USERS, &acc.user_id),
            bank_id: link(BANKS, &acc.bank_id),
            type_id: link(ACCOUNT_TYPES, &acc.type_id),
            name: acc.name,
            number: acc.number,
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account {
            id: key(&acc.id),
            user_id: key(&acc.user_id),
            bank_id: key(&acc.bank_id),
            type_id: key(&acc.type_id),
            name: acc.name,
            number: acc.number,
            created_at: acc.created_at.0,
            updated_at: acc.updated_at.0,
        }
    }
}
