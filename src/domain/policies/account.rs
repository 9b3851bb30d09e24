use crate::domain::models::account::Account;
use crate::domain::models::user::CurrentUser;

use super::Authorizer;

/// Accounts are visible to, and changeable by, their owner only.
pub struct AccountPolicy;

impl Authorizer<Account> for AccountPolicy {
    fn can_access(&self, user: &CurrentUser, account: &Account) -> bool {
        account.user_id == user.id
    }
}
