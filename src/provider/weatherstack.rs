use super::{ProviderError, WeatherProvider};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const UNKNOWN_ERROR_INFO: &str = "Unknown WeatherStack error";

pub struct WeatherstackClient {
    client: Client,
    historical_url: String,
}

impl WeatherstackClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("weather-data-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            historical_url: config.historical_url(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherstackClient {
    async fn fetch_historical(
        &self,
        api_key: &str,
        location: &str,
        date: &str,
    ) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(&self.historical_url)
            .query(&[
                ("access_key", api_key),
                ("query", location),
                ("historical_date", date),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!("Weatherstack responded with HTTP {}", status);
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;
        check_payload(json)
    }
}

/// Weatherstack reports bad queries with a 200 and an `error` member.
fn check_payload(json: Value) -> Result<Value, ProviderError> {
    match json.get("error") {
        Some(error) => {
            let info = match error.get("info") {
                Some(Value::String(info)) => info.clone(),
                Some(other) => other.to_string(),
                None => UNKNOWN_ERROR_INFO.to_string(),
            };
            Err(ProviderError::Rejected(info))
        }
        None => Ok(json),
    }
}
