use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::Account,
};

#[derive(Clone)]
struct Keys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// Issues and checks HS256 bearer tokens. Built without a secret it refuses
/// to issue anything rather than hand out unsigned tokens.
#[derive(Clone)]
pub struct JwtService {
    keys: Option<Keys>,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: Option<&SecretString>, expiration_hours: i64) -> Self {
        let keys = secret.map(|secret| {
            let secret_bytes = secret.expose_secret().as_bytes();
            Keys {
                encoding_key: EncodingKey::from_secret(secret_bytes),
                decoding_key: DecodingKey::from_secret(secret_bytes),
            }
        });

        // Expiry is exact: no clock leeway past `exp`.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            keys,
            validation,
            expiration_hours,
        }
    }

    fn keys(&self) -> AppResult<&Keys> {
        self.keys.as_ref().ok_or_else(|| {
            AppError::ConfigurationError(
                "JWT_SECRET is not set. Please add it to your .env file.".to_string(),
            )
        })
    }

    pub fn create_token(&self, account: &Account) -> AppResult<String> {
        self.encode_claims(&Claims::new(account, self.expiration_hours))
    }

    pub fn encode_claims(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.keys()?.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.keys()?.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }
}
