//! Verification code store configuration

use serde::{Deserialize, Serialize};

/// Where verification records are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStoreBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    Redis,
}

impl std::str::FromStr for CodeStoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            _ => Err(format!("Invalid code store: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    pub backend: CodeStoreBackend,
    /// Redis connection URL
    pub url: String,
    /// Prefix prepended to every key
    pub key_prefix: String,
    /// Connection attempts before giving up
    pub max_retries: u32,
    /// Base delay between retries in milliseconds (doubled per attempt)
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CodeStoreBackend::Memory,
            url: String::from("redis://localhost:6379"),
            key_prefix: String::from("cvacare"),
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: super::env_or("CODE_STORE", defaults.backend),
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").unwrap_or(defaults.key_prefix),
            max_retries: super::env_or("REDIS_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: super::env_or("REDIS_RETRY_DELAY_MS", defaults.retry_delay_ms),
        }
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }
}
