pub mod account;
pub mod account_type;
pub mod bank;
pub mod jsonwebtoken;
pub mod user;
