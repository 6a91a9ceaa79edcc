use anyhow::{Context, Result, bail};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb { uri: String, database: String },
    Memory,
}

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub base_url: String,
    pub storage: StorageBackend,
    pub cors_allowed_origins: Vec<String>, // Empty means any origin
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            None => 3000,
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| String::from("0.0.0.0"));

        let base_url = lookup("BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let storage = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("mongodb") => StorageBackend::MongoDb {
                uri: lookup("MONGODB_URI").context("MONGODB_URI not set")?,
                database: lookup("MONGODB_DATABASE")
                    .unwrap_or_else(|| String::from("qr_service")),
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("Unknown STORAGE_BACKEND: {}", other),
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_address,
            port,
            base_url,
            storage,
            cors_allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_mongo_uri_is_set() {
        let config = config_from(&[("MONGODB_URI", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(
            config.storage,
            StorageBackend::MongoDb {
                uri: "mongodb://localhost:27017".to_string(),
                database: "qr_service".to_string(),
            }
        );
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("BASE_URL", "https://qr.example.com/"),
        ])
        .unwrap();

        assert_eq!(config.base_url, "https://qr.example.com");
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "memory"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(config.cors_allowed_origins, ["http://a.test", "http://b.test"]);
    }

    #[rstest]
    #[case(&[("PORT", "not-a-port"), ("STORAGE_BACKEND", "memory")])]
    #[case(&[("STORAGE_BACKEND", "redis")])]
    #[case(&[("STORAGE_BACKEND", "mongodb")])]
    fn invalid_configuration_is_rejected(#[case] pairs: &[(&str, &str)]) {
        assert!(config_from(pairs).is_err());
    }
}
