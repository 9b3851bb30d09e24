use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::user::{CreateUser, Credentials, User},
    repositories::{repository::RepositoryError, user::UserRepository},
    services::user::UserService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use async_trait::async_trait;

const USER_EXISTS: &str = "User already exists";

pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[tracing::instrument(skip_all)]
    async fn signup(&self, new_user: CreateUser) -> AppResult<User> {
        let email = normalize_email(&new_user.email);

        if self.repository.email_taken(&email).await? {
            return Err(AppError::Conflict(USER_EXISTS));
        }

        let user = self
            .repository
            .insert(CreateUser {
                name: new_user.name.trim().to_owned(),
                email,
                password: hash_password(&new_user.password)?,
            })
            .await
            .map_err(|err| match err {
                RepositoryError::Duplicate { .. } => AppError::Conflict(USER_EXISTS),
                other => AppError::from(other),
            })?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(user)
    }

    #[tracing::instrument(skip_all)]
    async fn signin(&self, credentials: Credentials) -> AppResult<User> {
        let email = normalize_email(&credentials.email);

        let Some(user) = self.repository.find_by_email(&email).await? else {
            return Err(AppError::Unauthorized());
        };

        verify_password(&credentials.password, &user.password)?;

        tracing::info!(user_id = %user.id, "user signed in");

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let hash = PasswordHash::new(hash)?;

    Argon2::default().verify_password(password.as_bytes(), &hash)
}
