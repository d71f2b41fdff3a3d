use std::env;

use crate::error::{ClientError, ClientResult};

pub const API_URL_VAR: &str = "MODERATION_API_URL";

/// Startup configuration for the moderation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {}",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        let base_url = env::var(API_URL_VAR).map_err(|_| {
            ClientError::Config(format!("{} environment variable not set", API_URL_VAR))
        })?;
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(ClientConfig::new("  "), Err(ClientError::Config(_))));
        assert!(matches!(
            ClientConfig::new("localhost:8000"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        unsafe { env::set_var(API_URL_VAR, "https://moderation.example.com") };
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://moderation.example.com");

        unsafe { env::remove_var(API_URL_VAR) };
        assert!(matches!(ClientConfig::from_env(), Err(ClientError::Config(_))));
    }
}
