use crate::domain::models::user::{CreateUser, Credentials, User};
use crate::domain::rules::user::{is_email, is_password, is_user_name};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDTO {
    #[schema(examples("x8f2kq0c9d"))]
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct SignupDTO {
    #[validate(custom(function = "is_user_name"))]
    #[schema(examples("Ada Saver"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("ada@coffer.dev"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("ada@coffer.dev"))]
    pub email: String,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenDTO {
    #[schema(examples("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub token: String,
    #[schema(examples(1385903))]
    pub expires_at: i64,
}

impl From<User> for UserDTO {
    fn from(user: User) -> Self {
        UserDTO {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<SignupDTO> for CreateUser {
    fn from(signup: SignupDTO) -> Self {
        CreateUser {
            name: signup.name,
            email: signup.email,
            password: signup.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}
