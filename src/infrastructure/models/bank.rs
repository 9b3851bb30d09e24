use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::domain::models::bank::Bank;

use super::record::key;

#[derive(Debug, Deserialize)]
pub struct SurrealBank {
    id: Thing,
    name: String,
}

impl From<SurrealBank> for Bank {
    fn from(bank: SurrealBank) -> Self {
        Bank {
            id: key(&bank.id),
            name: bank.name,
        }
    }
}
