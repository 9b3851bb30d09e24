pub mod account;
pub mod jsonwebtoken;
pub mod user;
