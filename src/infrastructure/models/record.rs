use surrealdb::sql::{Id, Thing};

pub const USERS: &str = "users";
pub const BANKS: &str = "banks";
pub const ACCOUNT_TYPES: &str = "accountTypes";
pub const ACCOUNTS: &str = "accounts";

/// Record link for a key as it appears in forms and urls. Numeric keys map to
/// numeric record ids, so `"1"` addresses `banks:1` rather than `banks:⟨1⟩`.
pub fn link(table: &str, key: &str) -> Thing {
    let id = match key.parse::<i64>() {
        Ok(number) => Id::Number(number),
        Err(_) => Id::String(key.to_owned()),
    };

    Thing::from((table, id))
}

pub fn key(thing: &Thing) -> String {
    thing.id.to_raw()
}
