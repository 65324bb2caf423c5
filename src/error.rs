use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Weather API key not configured")]
    Configuration,
    #[error("Error fetching data from WeatherStack")]
    UpstreamFetch,
    #[error("{0}")]
    Validation(String),
    #[error("Weather data not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamFetch => StatusCode::BAD_GATEWAY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected(info) => AppError::Validation(info),
            _ => AppError::UpstreamFetch,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
