use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and passed its `Validate` rules.
/// Malformed bodies are rejected with 400, rule violations with 422.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T> ValidJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        web::Json::<T>::from_request(req, payload)
            .map(|res| -> Result<Self, AppError> {
                let body = res
                    .map_err(|err| AppError::BadRequest(err.to_string()))?
                    .into_inner();

                body.validate()?;

                Ok(ValidJson(body))
            })
            .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest},
        web,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
    struct BankDTO {
        #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
        name: String,
        #[validate(length(equal = 8, message = "Routing code must have 8 characters"))]
        routing: String,
    }

    #[derive(Deserialize)]
    struct Error {
        message: String,
    }

    async fn index(data: ValidJson<BankDTO>) -> impl Responder {
        HttpResponse::Ok().json(data.into_inner())
    }

    async fn send_req<T: DeserializeOwned>(data: &str) -> (StatusCode, T) {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload(data.to_string())
            .insert_header(ContentType::json())
            .send_request(&app)
            .await;

        let status = res.status();
        let body: T = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_data() {
        let data = BankDTO {
            name: "First Bank".to_string(),
            routing: "12345678".to_string(),
        };

        let (status, body) = send_req::<BankDTO>(&json!(data).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, data);
    }

    #[actix_web::test]
    async fn test_invalid_field_value() {
        let (status, err) =
            send_req::<Error>(r#"{ "name": "First Bank", "routing": "123" }"#).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.message,
            r#"{"routing":"Routing code must have 8 characters"}"#
        );
    }

    #[actix_web::test]
    async fn test_multiple_invalid_field_values() {
        let (status, err) = send_req::<Error>(r#"{ "name": "", "routing": "123" }"#).await;

        let message = serde_json::from_str::<serde_json::Value>(&err.message).unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            message,
            json!({
                "name": "Name must be between 2 and 50 characters",
                "routing": "Routing code must have 8 characters"
            })
        );
    }

    #[actix_web::test]
    async fn test_missing_field() {
        let (status, err) = send_req::<Error>(r#"{ "name": "First Bank" }"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("missing field `routing`"));
    }

    #[actix_web::test]
    async fn test_malformed_data() {
        let (status, err) = send_req::<Error>(r#"{ "name": }"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Json deserialize error"));
    }
}
