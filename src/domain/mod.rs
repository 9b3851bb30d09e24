pub mod error;
pub mod models;
pub mod policies;
pub mod repositories;
pub mod rules;
pub mod services;
