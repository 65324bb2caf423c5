use super::{ProviderError, WeatherProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug)]
pub enum MockOutcome {
    Payload(Value),
    Status(u16),
    Rejected(String),
}

/// Canned provider that counts how often it was called.
pub struct MockWeatherProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockWeatherProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn fetch_historical(
        &self,
        _api_key: &str,
        _location: &str,
        _date: &str,
    ) -> Result<Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            MockOutcome::Payload(value) => Ok(value.clone()),
            MockOutcome::Status(code) => Err(ProviderError::Status(
                reqwest::StatusCode::from_u16(*code)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            )),
            MockOutcome::Rejected(info) => Err(ProviderError::Rejected(info.clone())),
        }
    }
}
