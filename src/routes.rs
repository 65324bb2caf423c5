use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::{
    config::Config,
    error::AppError,
    provider::WeatherProvider,
    store::{CreateWeatherRecord, WeatherRecord, WeatherStore},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<WeatherStore>,
    pub provider: Arc<dyn WeatherProvider>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn create_weather_request(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<WeatherResponse>, AppError> {
    let api_key = state.config.api_key().ok_or_else(|| {
        tracing::error!("WEATHERSTACK_API_KEY is not configured");
        AppError::Configuration
    })?;

    let weather = state
        .provider
        .fetch_historical(api_key, &request.location, &request.date)
        .await
        .map_err(|e| {
            tracing::error!("Historical weather lookup for {} failed: {}", request.location, e);
            AppError::from(e)
        })?;

    let record = state
        .store
        .insert(CreateWeatherRecord {
            date: request.date,
            location: request.location,
            notes: request.notes.unwrap_or_default(),
            weather,
        })
        .await;

    tracing::info!("Stored weather record {} for {}", record.id, record.location);
    tracing::debug!("{} weather records in store", state.store.len().await);

    Ok(Json(WeatherResponse { id: record.id }))
}

pub async fn get_weather_data(
    State(state): State<AppState>,
    Path(weather_id): Path<String>,
) -> Result<Json<WeatherRecord>, AppError> {
    match state.store.get(&weather_id).await {
        Some(record) => Ok(Json(record)),
        None => {
            tracing::debug!("Weather record {} not found", weather_id);
            Err(AppError::NotFound)
        }
    }
}

/// Single allowed origin with credentials; methods and headers are mirrored
/// because wildcards are rejected alongside credentials.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    if origin.trim() == "*" {
        return Err(anyhow::anyhow!(
            "CORS origin cannot be a wildcard when credentials are allowed"
        ));
    }

    let origin = HeaderValue::from_str(origin)
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin {:?}: {}", origin, e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", post(create_weather_request))
        .route("/weather/:weather_id", get(get_weather_data))
        .with_state(state)
}
