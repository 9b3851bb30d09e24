use crate::domain::models::user::CurrentUser;

pub mod account;

/// Decides whether a user may view or change a resource.
pub trait Authorizer<R>: 'static + Sync + Send {
    fn can_access(&self, user: &CurrentUser, resource: &R) -> bool;
}
