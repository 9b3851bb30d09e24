use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::user::{CreateUser, User};
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::domain::repositories::user::UserRepository;
use crate::infrastructure::models::record::USERS;
use crate::infrastructure::models::user::{SurrealUser, SurrealUserCreate};

/// Unique index on `users.email`, named in `migration/schemas/users.surql`.
const UNIQUE_EMAIL: &str = "unique_email";

pub struct UserRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

#[derive(Debug, Deserialize)]
struct Count {
    count: i64,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn email_taken(&self, email: &str) -> RepositoryResult<bool> {
        let counter: Option<Count> = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE email = type::string($email) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", USERS))
            .bind(("email", email.to_owned()))
            .await?
            .take(0)?;

        Ok(counter.is_some_and(|c| c.count > 0))
    }

    async fn insert(&self, new_user: CreateUser) -> RepositoryResult<User> {
        let user: Option<SurrealUser> = self
            .db
            .create(USERS)
            .content(SurrealUserCreate::from(new_user))
            .await
            .map_err(|err| {
                if err.to_string().contains(UNIQUE_EMAIL) {
                    RepositoryError::Duplicate {
                        table: USERS,
                        field: "email",
                    }
                } else {
                    RepositoryError::Database(err)
                }
            })?;

        user.map(Into::into).ok_or(RepositoryError::NotCreated(USERS))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let user: Option<SurrealUser> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE email = type::string($email)")
            .bind(("table", USERS))
            .bind(("email", email.to_owned()))
            .await?
            .take(0)?;

        Ok(user.map(Into::into))
    }
}
