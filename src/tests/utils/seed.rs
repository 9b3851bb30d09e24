use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

use crate::domain::models::user::User;
use crate::infrastructure::models::record::key;

pub const PASSWORD: &str = "stR0ngP4ssw0rd!";

pub async fn seed_user(conn: &Surreal<Client>, email: &str) -> User {
    let thing: Option<Thing> = conn
        .query(
            r#"
            LET $user = (CREATE users CONTENT {
                name: 'Test User',
                email: $email,
                password: crypto::argon2::generate($password)
            });
            RETURN $user[0].id;
            "#,
        )
        .bind(("email", email.to_owned()))
        .bind(("password", PASSWORD))
        .await
        .unwrap()
        .take(1)
        .unwrap();

    User {
        id: key(&thing.unwrap()),
        name: "Test User".to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
    }
}
