pub mod weatherstack;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Provider responded with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
    /// The provider answered 200 but the body reports an error.
    #[error("Provider rejected request: {0}")]
    Rejected(String),
}

/// Source of historical weather observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns the provider's payload untouched.
    async fn fetch_historical(
        &self,
        api_key: &str,
        location: &str,
        date: &str,
    ) -> Result<Value, ProviderError>;
}
