use std::env;
use secrecy::SecretString;

/// Largest résumé upload accepted, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: Option<String>,
    pub mongo_db_name: String,
    pub openai_api_key: Option<SecretString>,
    pub openai_model: String,
    pub openai_api_base: Option<String>,
    pub jwt_secret: Option<SecretString>,
    pub jwt_expiration_hours: i64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    pub seed_questions: bool,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Every capability is optional at boot; missing pieces surface when
    /// the endpoint that needs them is called.
    pub fn from_env() -> Self {
        Self {
            mongodb_uri: non_empty_var("MONGODB_URI"),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "mock-interview".to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY").map(SecretString::from),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_base: non_empty_var("OPENAI_API_BASE"),
            jwt_secret: non_empty_var("JWT_SECRET").map(SecretString::from),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(1),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            seed_questions: env::var("SEED_QUESTIONS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Logs each optional capability that is switched off.
    pub fn warn_missing(&self) {
        if self.mongodb_uri.is_none() {
            log::warn!("MONGODB_URI is not set. Server will start without a database connection.");
        }
        if self.openai_api_key.is_none() {
            log::warn!(
                "OPENAI_API_KEY is not set. AI evaluation endpoints will not work until it is configured."
            );
        }
        if self.jwt_secret.is_none() {
            log::warn!("JWT_SECRET is not set. Registration and login will fail to issue tokens.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongodb_uri: None,
            mongo_db_name: "mock-interview-test".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_base: None,
            jwt_secret: Some(SecretString::from("test_jwt_secret_key".to_string())),
            jwt_expiration_hours: 1,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            upload_dir: std::env::temp_dir()
                .join("mock-interview-test-uploads")
                .to_string_lossy()
                .into_owned(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            seed_questions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.openai_model.is_empty());
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.mongodb_uri.is_none());
        assert!(config.openai_api_key.is_none());
        assert!(config.jwt_secret.is_some());
        assert_eq!(config.jwt_expiration_hours, 1);
    }
}
