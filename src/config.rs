use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl StoreBackend {
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub submissions_collection: String,
    pub mongo_max_pool_size: u32,
    pub mongo_min_pool_size: u32,
    pub mongo_timeout: Duration,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_temperature: f64,
    pub access_token: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            store_backend: StoreBackend::from_env_value(
                &env::var("STORE_BACKEND").unwrap_or_default(),
            ),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "vibe-lab-local".to_string()),
            submissions_collection: env::var("SUBMISSIONS_COLLECTION")
                .unwrap_or_else(|_| "submissions".to_string()),
            mongo_max_pool_size: env::var("MONGO_MAX_POOL_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),
            mongo_min_pool_size: env::var("MONGO_MIN_POOL_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(2),
            mongo_timeout: Duration::from_secs(
                env::var("MONGO_TIMEOUT_SECS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(5),
            ),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            openai_temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.3),
            access_token: env::var("ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
        }
    }

    /// Reports settings that make every generation attempt fail.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is not set; every generation attempt will fail".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.openai_temperature) {
            return Err(AppError::InternalError(format!(
                "OPENAI_TEMPERATURE must be between 0 and 2 (got {})",
                self.openai_temperature
            )));
        }

        if self.mongo_max_pool_size == 0 || self.mongo_min_pool_size > self.mongo_max_pool_size {
            return Err(AppError::InternalError(format!(
                "MONGO_MIN_POOL_SIZE ({}) must not exceed a non-zero MONGO_MAX_POOL_SIZE ({})",
                self.mongo_min_pool_size, self.mongo_max_pool_size
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            store_backend: StoreBackend::Memory,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "vibe-lab-test".to_string(),
            submissions_collection: "submissions".to_string(),
            mongo_max_pool_size: 10,
            mongo_min_pool_size: 2,
            mongo_timeout: Duration::from_secs(5),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            openai_api_key: SecretString::from("test-openai-key".to_string()),
            openai_api_base: "http://127.0.0.1:1".to_string(),
            openai_model: "gpt-4.1-mini".to_string(),
            openai_temperature: 0.3,
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.openai_model.is_empty());
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!(StoreBackend::from_env_value("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_env_value(" Memory "), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_env_value("mongo"), StoreBackend::Mongo);
        assert_eq!(StoreBackend::from_env_value(""), StoreBackend::Mongo);
    }

    #[test]
    fn test_validate_accepts_test_config() {
        assert!(Config::test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let config = Config {
            openai_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        assert!(matches!(config.validate(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let config = Config {
            openai_temperature: 3.5,
            ..Config::test_config()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let config = Config {
            mongo_min_pool_size: 20,
            mongo_max_pool_size: 5,
            ..Config::test_config()
        };
        assert!(config.validate().is_err());

        let empty_pool = Config {
            mongo_min_pool_size: 0,
            mongo_max_pool_size: 0,
            ..Config::test_config()
        };
        assert!(empty_pool.validate().is_err());
    }
}
