use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default identity provider URL (local development stack)
const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:54321";

/// Desktop app configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_PROVIDER_URL.to_string()),
                api_key: None,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `AUTH_PROVIDER_URL` and `AUTH_PROVIDER_KEY` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder().server_url(
            std::env::var("AUTH_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string()),
        );
        if let Ok(key) = std::env::var("AUTH_PROVIDER_KEY") {
            builder = builder.api_key(key);
        }
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for a provider endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.provider_url(), path)
    }

    pub fn provider_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_PROVIDER_URL)
    }

    /// Public API key sent as the `apikey` header, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.app.api_key.as_deref()
    }
}
