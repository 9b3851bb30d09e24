use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::{AccessToken, Claims};
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JsonWebTokenError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

#[derive(Clone)]
pub struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    pub fn from_rsa_pem(private_key: &[u8], public_key: &[u8]) -> Result<Self, JsonWebTokenError> {
        Ok(KeyPair {
            encoding: EncodingKey::from_rsa_pem(private_key)?,
            decoding: DecodingKey::from_rsa_pem(public_key)?,
        })
    }
}

pub struct JsonWebTokenServiceImpl {
    keys: KeyPair,
    issuer: String,
    ttl: Duration,
}

impl JsonWebTokenServiceImpl {
    pub fn new(keys: KeyPair, issuer: impl Into<String>, ttl: Duration) -> Self {
        JsonWebTokenServiceImpl {
            keys,
            issuer: issuer.into(),
            ttl,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl JsonWebTokenService for JsonWebTokenServiceImpl {
    fn generate_token(&self, user_id: String) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalError().trace("token expiration overflow"))?
            .timestamp();

        let claims = Claims {
            sub: user_id,
            iss: self.issuer.clone(),
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(AccessToken { token, expiration })
    }

    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        match decode::<Claims>(token, &self.keys.decoding, &self.validation()) {
            Ok(token) => Ok(token.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => Err(AppError::Unauthorized()),
                _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
            },
        }
    }
}
