use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::user::{CreateUser, User};

use super::record::key;

#[derive(Debug, Deserialize)]
pub struct SurrealUser {
    id: Thing,
    name: String,
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct SurrealUserCreate {
    name: String,
    email: String,
    password: String,
}

impl From<CreateUser> for SurrealUserCreate {
    fn from(user: CreateUser) -> Self {
        SurrealUserCreate {
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

impl From<SurrealUser> for User {
    fn from(user: SurrealUser) -> Self {
        User {
            id: key(&user.id),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}
