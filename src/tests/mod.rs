
pub mod utils;

use std::sync::Arc;

use ::surrealdb::{Surreal, engine::remote::ws::Client};
use actix_http::Request;
use actix_web::{
    body::MessageBody,
    cookie::Cookie,
    dev::{Service, ServiceResponse},
    http::{StatusCode, header},
    test::TestRequest,
};
use rstest::fixture;
use serde::Deserialize;
use serde_json::json;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::{
    surrealdb::{SURREALDB_PORT, SurrealDb},
    testcontainers::runners::AsyncRunner,
};

use crate::config::AppConfig;
use crate::container::Container;
use crate::infrastructure::databases::surrealdb;
use crate::tests::utils::keys::keypair;

/// Server version matching the `surrealdb` client crate.
const SURREALDB_TAG: &str = "v2.2.1";

/// Services wired to a migrated SurrealDB running in a throwaway container.
/// The container is removed when the context is dropped.
pub struct TestContext {
    pub conn: Surreal<Client>,
    pub container: Arc<Container>,
    _surrealdb: ContainerAsync<SurrealDb>,
}

#[fixture]
pub async fn context() -> TestContext {
    let node = SurrealDb::default()
        .with_tag(SURREALDB_TAG)
        .start()
        .await
        .unwrap();

    let mut config = AppConfig::default();
    config.surrealdb.host = "127.0.0.1".to_string();
    config.surrealdb.port = node.get_host_port_ipv4(SURREALDB_PORT).await.unwrap();

    let conn = surrealdb::connect(&config.surrealdb).await.unwrap();
    surrealdb::migrate(&conn).await.unwrap();

    TestContext {
        container: Arc::new(Container::new(conn.clone(), keypair(), &config)),
        conn,
        _surrealdb: node,
    }
}

/// Signs in through the API and returns the `Authorization` cookie it sets.
pub async fn signin<S, B>(app: &S, email: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/api/v1/signin")
        .set_json(json!({ "email": email, "password": password }))
        .send_request(app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let set_cookie = res.headers().get(header::SET_COOKIE).unwrap();

    Cookie::parse_encoded(set_cookie.to_str().unwrap().to_owned()).unwrap()
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Error {
    code: u16,
    message: String,
}
