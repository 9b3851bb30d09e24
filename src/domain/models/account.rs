use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

/// Raw form submission, keyed by field name.
pub type FormFields = HashMap<String, String>;

/// Field name to the first message reported for it.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub bank_id: String,
    pub type_id: String,
    pub name: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    pub user_id: String,
    pub bank_id: String,
    pub type_id: String,
    pub name: String,
    pub number: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StoreOutcome {
    Created(Account),
    Rejected {
        errors: FieldErrors,
        input: FormFields,
    },
}
