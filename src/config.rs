use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Checked on every create request rather than at startup.
    pub weatherstack_api_key: Option<String>,
    pub weatherstack_base_url: String,
    pub weatherstack_historical_path: String,
    pub bind_addr: String,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| anyhow::anyhow!("BIND_ADDR is not a valid socket address: {}", e))?;

        Ok(Config {
            weatherstack_api_key: lookup("WEATHERSTACK_API_KEY").filter(|key| !key.is_empty()),
            weatherstack_base_url: lookup("WEATHERSTACK_BASE_URL")
                .unwrap_or_else(|| "http://api.weatherstack.com".to_string()),
            weatherstack_historical_path: lookup("WEATHERSTACK_HISTORICAL_PATH")
                .unwrap_or_else(|| "/historical".to_string()),
            bind_addr,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }

    pub fn historical_url(&self) -> String {
        format!(
            "{}{}",
            self.weatherstack_base_url.trim_end_matches('/'),
            self.weatherstack_historical_path
        )
    }

    pub fn api_key(&self) -> Option<&str> {
        self.weatherstack_api_key.as_deref()
    }
}
